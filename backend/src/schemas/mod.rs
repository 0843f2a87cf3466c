//! Statically defined form schemas served by this deployment.

pub mod employee_onboarding;
