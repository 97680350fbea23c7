//! Types shared by every resource managed by AWS Controllers for Kubernetes.

pub mod v1alpha1;
