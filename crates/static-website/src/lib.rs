//! # google-cloud-static-website
//!
//! Binding for the `Website` component resource: a static website bundling
//! a storage bucket, an optional CDN, and optional custom-domain wiring,
//! declared as a single unit.
//!
//! This crate carries no provisioning logic. It defines the typed argument
//! shape, checks the one required field before dispatch, forwards a single
//! registration envelope through [`resource_sdk`], and exposes the
//! provider's URL outputs as deferred, read-only accessors. The provider
//! plugin that actually creates buckets, CDN distributions, and DNS records
//! lives out of process.

pub mod website;

pub use website::{Website, WebsiteArgs, WEBSITE_TYPE};
