//! Kubernetes custom resource types for API Gateway v2 Routes managed by
//! AWS Controllers for Kubernetes.

pub mod apis;
pub mod cmd;
pub mod config;
pub mod crd;
pub mod error;
pub mod logging;
pub mod output;
pub mod scheme;
