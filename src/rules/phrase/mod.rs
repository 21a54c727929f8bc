mod helpers;
pub(crate) mod rules;
