pub mod deriver;
pub mod region_table;
pub mod request;
pub mod response;

pub use deriver::{derive, release_date_fragment};
pub use region_table::RegionTable;
pub use request::RegistrationInput;
pub use response::DerivedFields;

use crate::usecases::common::UseCaseMetadata;

pub struct DerivePackageCode;

impl UseCaseMetadata for DerivePackageCode {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "derive_package_code"
    }

    fn display_name() -> &'static str {
        "数据包登记"
    }

    fn description() -> &'static str {
        "根据登记信息生成地区、发布日期、属性编码、内部编号和任务前缀"
    }
}
