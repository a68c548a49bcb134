//! # mediahost-entity
//!
//! Domain entity models for MediaHost. Database rows derive
//! `sqlx::FromRow`; presentation structs carry the wire names the
//! management API has always used.

pub mod folder;
pub mod host;
pub mod tenant;
