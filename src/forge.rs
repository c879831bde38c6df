//! Review platform access: lists merge requests that are waiting for review.

/// GitLab API client implementation for GitLab.com and self-hosted instances.
pub mod gitlab;

/// Normalized merge request types shared by forge implementations.
pub mod request;

/// Common traits for forge platform abstraction.
pub mod traits;
