pub(crate) mod dashboard;
pub(crate) mod flow;
pub(crate) mod gesture;
pub(crate) mod left_sidebar;
pub(crate) mod navbar;
pub(crate) mod orders;
pub(crate) mod right_sidebar;
pub(crate) mod window;
