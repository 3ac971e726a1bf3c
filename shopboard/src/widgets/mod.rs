pub(crate) mod dashboard;
pub(crate) mod left_sidebar;
pub(crate) mod navbar;
pub(crate) mod orders;
pub(crate) mod right_sidebar;
