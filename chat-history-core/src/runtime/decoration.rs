use crate::render::StyledText;

/// Host-side chat formatting applied to a live message before it is stored.
///
/// For player chat this typically yields `<Name> content`; for `/me` it yields
/// `* Name content`.
pub trait ChatDecoration {
    fn decorate(&self, content: &str) -> StyledText;
}

impl<F> ChatDecoration for F
where
    F: Fn(&str) -> StyledText,
{
    fn decorate(&self, content: &str) -> StyledText {
        self(content)
    }
}
