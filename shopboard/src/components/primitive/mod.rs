pub(crate) mod icon_button;
pub(crate) mod status_badge;
