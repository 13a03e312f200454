//! # Service Layer
//!
//! - [`OnboardingStatusService`]: onboarding checklist evaluation per tenant

pub mod onboarding_status_service;

pub use onboarding_status_service::OnboardingStatusService;
