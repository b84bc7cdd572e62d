use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "launch.html")]
pub struct LaunchTemplate {
    pub ctx: PageContext,
}
