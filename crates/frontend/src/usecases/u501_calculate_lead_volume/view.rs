use crate::shared::components::{CardAnimated, StatTone};
use crate::shared::number_utils::{format_currency, format_number};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::toast::ToastService;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata};
use contracts::usecases::u501_calculate_lead_volume::{
    calculate, CalculateLeadVolume, CalculatorInput, CalculatorResult,
};
use leptos::prelude::*;
use thaw::*;

pub const PAGE_ID: &str = "u501_calculate_lead_volume--usecase";

/// One result card: label, formatted value, colour
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub label: &'static str,
    pub value: String,
    pub tone: StatTone,
}

/// Cards for a calculation. Cost is shown only when a cost was entered,
/// revenue and profit only with a revenue, ROI only with both.
pub fn result_cards(result: &CalculatorResult, input: &CalculatorInput) -> Vec<ResultCard> {
    let mut cards = vec![
        ResultCard {
            label: "所需线索量",
            value: format_number(result.required_leads as f64, 0),
            tone: StatTone::Neutral,
        },
        ResultCard {
            label: "预计接通数",
            value: format_number(result.expected_contacts as f64, 0),
            tone: StatTone::Neutral,
        },
        ResultCard {
            label: "预计意向客户",
            value: format_number(result.expected_interested as f64, 0),
            tone: StatTone::Neutral,
        },
    ];
    if input.has_cost() {
        cards.push(ResultCard {
            label: "总成本",
            value: format_currency(result.total_cost, 2),
            tone: StatTone::Warning,
        });
    }
    if input.has_revenue() {
        cards.push(ResultCard {
            label: "预计收入",
            value: format_currency(result.total_revenue, 2),
            tone: StatTone::Neutral,
        });
        cards.push(ResultCard {
            label: "预计利润",
            value: format_currency(result.profit, 2),
            tone: StatTone::for_signed(result.profit),
        });
    }
    if input.has_cost() && input.has_revenue() {
        cards.push(ResultCard {
            label: "投资回报率",
            value: format!("{}%", result.roi_display()),
            tone: StatTone::for_signed(result.roi),
        });
    }
    cards
}

/// Toast text for a rejected form
fn error_text(err: &UseCaseError) -> String {
    match &err.details {
        Some(details) if !details.is_empty() => format!("{} ({})", err.message, details),
        _ => err.message.clone(),
    }
}

#[component]
pub fn LeadVolumeCalculator() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let target_conversions = RwSignal::new(String::new());
    let contact_rate = RwSignal::new(String::new());
    let interest_rate = RwSignal::new(String::new());
    let cost_per_lead = RwSignal::new(String::new());
    let revenue_per_lead = RwSignal::new(String::new());
    let cards = RwSignal::new(Vec::<ResultCard>::new());

    let on_calculate = move |_| {
        let input = CalculatorInput {
            target_conversions: target_conversions.get_untracked(),
            contact_rate: contact_rate.get_untracked(),
            interest_rate: interest_rate.get_untracked(),
            cost_per_lead: cost_per_lead.get_untracked(),
            revenue_per_lead: revenue_per_lead.get_untracked(),
        };
        match calculate(&input) {
            Ok(result) => {
                log::debug!("u501: {:?}", result);
                cards.set(result_cards(&result, &input));
            }
            Err(err) => {
                log::info!("u501 rejected: {}", err);
                cards.set(Vec::new());
                toasts.error(error_text(&err));
            }
        }
    };

    let on_reset = move |_| {
        for field in [
            target_conversions,
            contact_rate,
            interest_rate,
            cost_per_lead,
            revenue_per_lead,
        ] {
            field.set(String::new());
        }
        cards.set(Vec::new());
    };

    let field = move |label: &'static str, value: RwSignal<String>, placeholder: &'static str| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <Input value=value input_type=InputType::Number placeholder=placeholder />
            </div>
        }
    };

    view! {
        <PageFrame page_id=PAGE_ID category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{CalculateLeadVolume::display_name()}</h1>
                    <p class="page__subtitle">{CalculateLeadVolume::description()}</p>
                </div>
            </div>

            <div class="page__content">
                <CardAnimated style="max-width: 640px;">
                    <div class="details-form">
                        {field("目标意向客户数 *", target_conversions, "例如 100")}
                        {field("接通率 (%) *", contact_rate, "例如 35")}
                        {field("意向率 (%) *", interest_rate, "例如 15")}
                        {field("单条线索成本 (¥)", cost_per_lead, "可选")}
                        {field("单个意向客户收益 (¥)", revenue_per_lead, "可选")}
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=on_calculate>
                            "计算"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                            "重置"
                        </Button>
                    </div>
                </CardAnimated>

                <div class="stat-cards">
                    {move || {
                        cards
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, card)| {
                                view! {
                                    <CardAnimated index=i>
                                        <div class=card.tone.class()>
                                            <div class="stat-card__content">
                                                <div class="stat-card__label">{card.label}</div>
                                                <div class="stat-card__value">{card.value}</div>
                                            </div>
                                        </div>
                                    </CardAnimated>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cost: &str, revenue: &str) -> CalculatorInput {
        CalculatorInput {
            target_conversions: "100".into(),
            contact_rate: "35".into(),
            interest_rate: "15".into(),
            cost_per_lead: cost.into(),
            revenue_per_lead: revenue.into(),
        }
    }

    fn labels(cards: &[ResultCard]) -> Vec<&'static str> {
        cards.iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_funnel_only() {
        let input = input("", "");
        let result = calculate(&input).unwrap();
        let cards = result_cards(&result, &input);
        assert_eq!(labels(&cards), vec!["所需线索量", "预计接通数", "预计意向客户"]);
        assert_eq!(cards[0].value, "1,905");
    }

    #[test]
    fn test_cost_and_revenue_cards() {
        let input = input("5", "50");
        let result = calculate(&input).unwrap();
        let cards = result_cards(&result, &input);
        assert_eq!(cards.len(), 7);
        let roi = cards.last().unwrap();
        assert_eq!(roi.label, "投资回报率");
        assert_eq!(roi.value, format!("{}%", result.roi_display()));

        let cost_only = self::input("5", "");
        let result = calculate(&cost_only).unwrap();
        assert_eq!(labels(&result_cards(&result, &cost_only)).last(), Some(&"总成本"));
    }

    #[test]
    fn test_error_text() {
        let err = UseCaseError::missing_fields(&["contact_rate"]);
        assert_eq!(error_text(&err), "请填写必填项 (contact_rate)");
        let err = UseCaseError::new("X", "x");
        assert_eq!(error_text(&err), "x");
    }
}
