#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod workflow_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod error_tests;

#[cfg(test)]
mod analytics_tests;

#[cfg(test)]
mod dashboard_tests;
