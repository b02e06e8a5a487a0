//! Types and pure logic shared by the lead package console: backend
//! contracts (packages, dial tasks, tag summaries, response envelope) and
//! the lead volume calculator / package code deriver.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
