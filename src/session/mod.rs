pub(crate) mod fingerprint;
pub(crate) mod graph_session;
