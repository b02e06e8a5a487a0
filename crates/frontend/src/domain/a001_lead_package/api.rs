use contracts::domain::a001_lead_package::aggregate::{
    LeadPackage, LeadPackageDetail, LeadPackageDto, PackageListQuery,
};
use contracts::domain::a002_dial_task::aggregate::{DialTask, DialTaskDto};

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_config::{endpoint, endpoints};

pub async fn fetch_packages(query: &PackageListQuery) -> Result<Vec<LeadPackage>, ApiError> {
    api_client::get_with_query(endpoints::PACKAGES, query).await
}

/// Package with its dial tasks and tag statistics
pub async fn fetch_package(id: i64) -> Result<LeadPackageDetail, ApiError> {
    api_client::get(&endpoint(endpoints::PACKAGE, id)).await
}

pub async fn create_package(dto: &LeadPackageDto) -> Result<LeadPackage, ApiError> {
    dto.validate().map_err(ApiError::Rejected)?;
    api_client::post(endpoints::PACKAGES, dto).await
}

pub async fn delete_package(id: i64) -> Result<Option<String>, ApiError> {
    api_client::delete(&endpoint(endpoints::PACKAGE, id)).await
}

pub async fn fetch_tasks(package_id: i64) -> Result<Vec<DialTask>, ApiError> {
    api_client::get(&endpoint(endpoints::PACKAGE_TASKS, package_id)).await
}

pub async fn create_task(package_id: i64, dto: &DialTaskDto) -> Result<DialTask, ApiError> {
    dto.validate().map_err(ApiError::Rejected)?;
    api_client::post(&endpoint(endpoints::PACKAGE_TASKS, package_id), dto).await
}

/// Create a package and then its first dial task named after `task_prefix`.
///
/// Returns the package even when the task could not be created; the task
/// error is returned alongside so the caller can report it.
pub async fn register_package(
    dto: &LeadPackageDto,
    task_prefix: &str,
) -> Result<(LeadPackage, Option<ApiError>), ApiError> {
    let package = create_package(dto).await?;
    log::info!("package #{} created: {}", package.id, package.name);

    let task_error = match create_task(package.id, &DialTaskDto::first_for(task_prefix)).await {
        Ok(task) => {
            log::info!("dial task #{} created for package #{}", task.id, package.id);
            None
        }
        Err(e) => {
            log::error!("first dial task for package #{} failed: {}", package.id, e);
            Some(e)
        }
    };
    Ok((package, task_error))
}
