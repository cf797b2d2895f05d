//! The site's own configuration, used when no config file is given.

use std::num::{NonZeroU32, NonZeroUsize};
use std::sync::LazyLock;

use crate::config::{Config, LogoConfig, SiteConfig};
use crate::locale::LocalePreference;
use crate::social::SocialLink;

const POST_PER_PAGE: NonZeroUsize = NonZeroUsize::new(10).unwrap();
const LOGO_WIDTH: NonZeroU32 = NonZeroU32::new(216).unwrap();
const LOGO_HEIGHT: NonZeroU32 = NonZeroU32::new(46).unwrap();

pub static CONFIG: LazyLock<Config> = LazyLock::new(config);

pub fn site() -> SiteConfig {
    SiteConfig {
        website: "https://nickguletskii.com/".to_string(),
        author: "Nick Guletskii".to_string(),
        desc: "Nick Guletskii's personal webpage and blog".to_string(),
        title: "Nick Guletskii".to_string(),
        og_image: "astropaper-og.jpg".to_string(),
        light_and_dark_mode: true,
        post_per_page: POST_PER_PAGE
    }
}

/// Set to an empty list to use the environment default.
pub fn locale() -> LocalePreference {
    LocalePreference::new(["en-EN"])
}

pub fn logo() -> LogoConfig {
    LogoConfig {
        enable: false,
        svg: true,
        width: LOGO_WIDTH,
        height: LOGO_HEIGHT
    }
}

pub fn socials(site: &SiteConfig) -> Vec<SocialLink> {
    let title = &site.title;
    vec![
        SocialLink::new(
            "Github",
            "https://github.com/nickguletskii",
            format!(" {title} on Github"),
            true
        ),
        SocialLink::new(
            "LinkedIn",
            "https://www.linkedin.com/in/nickguletskii/",
            format!("{title} on LinkedIn"),
            true
        ),
        SocialLink::new(
            "Mail",
            "mailto:nick@nickguletskii.com",
            format!("Send an email to {title}"),
            false
        ),
        SocialLink::new(
            "GitLab",
            "https://gitlab.com/nickguletskii/",
            format!("{title} on GitLab"),
            false
        )
    ]
}

pub fn config() -> Config {
    let site = site();
    Config {
        locale: locale(),
        socials: socials(&site),
        logo: logo(),
        site
    }
}
