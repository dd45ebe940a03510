mod app;
mod entry;

use scroll_assist::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
