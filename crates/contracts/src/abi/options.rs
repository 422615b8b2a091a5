#[derive(Clone, Debug, Default)]
pub struct AbiOptions {
    /// Fail when two functions share a method id instead of keeping the
    /// first one declared.
    pub reject_duplicate_ids: bool,
}
