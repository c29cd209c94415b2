pub(super) mod form;
pub(super) mod grid;
pub(super) mod popups;
pub(super) mod status;
pub(super) mod util;

#[cfg(test)]
pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> std::borrow::Cow<'_, str> {
    util::truncate_with_ellipsis(input, max_graphemes)
}

#[cfg(test)]
pub(super) const fn grid_columns(width: u16) -> usize {
    util::grid_columns(width)
}
