//! Response envelope shared by every backend endpoint:
//! `{ "success": bool, "data": ..., "message": ..., "error": ..., "pagination": ... }`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response, or the backend's error text.
    ///
    /// A successful response without `data` is also an error.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .error
                .or(self.message)
                .unwrap_or_else(|| "请求失败".to_string()));
        }
        self.data.ok_or_else(|| "响应缺少数据".to_string())
    }
}

/// Body-less success, e.g. `DELETE /packages/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiAck {
    pub fn into_result(self) -> Result<Option<String>, String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(self.error.or(self.message).unwrap_or_else(|| "请求失败".to_string()))
        }
    }
}
