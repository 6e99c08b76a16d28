/**
 * Server Configuration
 *
 * This module handles loading of server configuration from the environment:
 * the optional Supabase backend connection and the runtime settings that
 * pick the write strategy and the persist-failure policy.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the backend credentials are missing the client is `None` and the
 * server runs without persistence: the participant counter degrades to
 * cache-only operation, while the endpoints whose surface requires the
 * backend answer 500 "not configured".
 */

use crate::backend::supabase::SupabaseClient;

/// How membership writes behave when the atomic RPC is unavailable.
///
/// The manual insert/delete + count fallback is not atomic relative to
/// concurrent callers: two overlapping requests can interleave their reads
/// and writes and lose an update. `AtomicOnly` fails closed instead of
/// taking that path; `Fallback` keeps the fast, racy behavior of the
/// original deployment. Decided once at startup, never per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteStrategy {
    /// RPC errors are surfaced to the caller; no manual fallback
    AtomicOnly,
    /// Fall back to manual table writes when the RPC errors
    #[default]
    Fallback,
}

/// What to do when a participant-count write to the backend fails.
///
/// The default keeps the observed behavior: log, answer success, and fan
/// out the locally computed value, so a transient backend error never
/// punishes the room UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersistFailurePolicy {
    /// Log the failure and keep going with the computed value
    #[default]
    Ignore,
    /// Surface the failure as a 500
    Fail,
}

/// Runtime settings decided at startup
#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    pub write_strategy: WriteStrategy,
    pub persist_failures: PersistFailurePolicy,
}

/// Supabase configuration result
///
/// Contains the backend client if successfully configured, or `None` if
/// the backend is not available.
pub type SupabaseConfig = Option<SupabaseClient>;

/// Load the Supabase client from the environment
///
/// Reads `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY`. Returns `None`
/// when either is missing so the server can start without persistence.
pub fn load_supabase() -> SupabaseConfig {
    let url = match std::env::var("SUPABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            tracing::warn!("SUPABASE_URL not set. Persistence will be disabled.");
            return None;
        }
    };

    let key = match std::env::var("SUPABASE_SERVICE_ROLE_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::warn!("SUPABASE_SERVICE_ROLE_KEY not set. Persistence will be disabled.");
            return None;
        }
    };

    tracing::info!("Supabase backend configured at {}", url);
    Some(SupabaseClient::new(url, key))
}

/// Load runtime settings from the environment
///
/// Unknown values are logged and replaced with the defaults.
pub fn load_settings() -> Settings {
    let write_strategy = match std::env::var("VOCABLY_WRITE_STRATEGY").as_deref() {
        Ok("atomic-only") => WriteStrategy::AtomicOnly,
        Ok("fallback") | Err(_) => WriteStrategy::Fallback,
        Ok(other) => {
            tracing::warn!(
                "Unknown VOCABLY_WRITE_STRATEGY '{}', using 'fallback'",
                other
            );
            WriteStrategy::Fallback
        }
    };

    let persist_failures = match std::env::var("VOCABLY_PERSIST_FAILURES").as_deref() {
        Ok("fail") => PersistFailurePolicy::Fail,
        Ok("ignore") | Err(_) => PersistFailurePolicy::Ignore,
        Ok(other) => {
            tracing::warn!(
                "Unknown VOCABLY_PERSIST_FAILURES '{}', using 'ignore'",
                other
            );
            PersistFailurePolicy::Ignore
        }
    };

    let settings = Settings {
        write_strategy,
        persist_failures,
    };
    tracing::info!(?settings, "Runtime settings loaded");
    settings
}
