use clap::Parser;

use crate::error::{AppError, AppResult};

use super::AssistArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<AssistArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    AssistArgs::try_parse_from(args).map_err(AppError::from)
}
