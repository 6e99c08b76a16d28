//! Supabase Module
//!
//! Client for the managed data backend: a PostgREST-style table query API
//! (select/insert/update/delete with equality filters and exact counts) plus
//! named atomic server-side procedures under `/rest/v1/rpc/`.
//!
//! Everything durable in this service goes through this client; the server
//! itself never speaks SQL.

pub mod client;

pub use client::{SupabaseClient, SupabaseError};
