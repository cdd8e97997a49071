//! [`crate::WebAppsClient`] operations, grouped by area.
//!
//! Each public site/slot pair delegates to one private `*_at` helper that
//! takes the already rendered resource path.

mod backups;
mod configuration;
mod deployments;
mod functions;
mod host_names;
mod network_traces;
mod networking;
mod processes;
mod site_extensions;
mod sites;
mod web_jobs;
mod workflows;
