/// The seam between the transport and application logic.
///
/// The subscriber invokes `handle` once per delivered payload, possibly
/// from several delivery tasks at once, so implementations must be
/// `Send + Sync` and must not rely on exclusive access. Implementations
/// are expected not to panic; the validator used by the consumer converts
/// every failure into a returned outcome.
pub trait MessageHandler: Send + Sync {
    fn handle(&self, payload: &[u8]);
}
