use log::debug;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::Config;
use crate::error::ConfigError;
use crate::social::SocialLink;

const SOCIALS_TEMPLATE: &str = r#"<ul class="social-icons">
{%- for link in socials %}
  <li><a href="{{ link.href }}" class="link-button" title="{{ link.link_title }}" data-social="{{ link.name }}">{{ link.name }}</a></li>
{%- endfor %}
</ul>
"#;

const HEAD_TEMPLATE: &str = r#"<title>{{ site.title }}</title>
{%- if site.desc %}
<meta name="description" content="{{ site.desc }}">
{%- endif %}
<meta name="author" content="{{ site.author }}">
<meta property="og:title" content="{{ site.title }}">
{%- if site.desc %}
<meta property="og:description" content="{{ site.desc }}">
{%- endif %}
<meta property="og:image" content="{{ og_image }}">
<meta property="og:locale" content="{{ og_locale }}">
{%- if site.light_and_dark_mode %}
<meta name="color-scheme" content="light dark">
{%- endif %}
"#;

#[derive(Serialize)]
struct SocialItem<'a> {
    name: &'a str,
    href: &'a str,
    link_title: &'a str
}

impl<'a> From<&'a SocialLink> for SocialItem<'a> {
    fn from(link: &'a SocialLink) -> Self {
        Self {
            name: &link.name,
            href: &link.href,
            link_title: link.link_title.trim()
        }
    }
}

/// HTML fragments for the page shell. Output is autoescaped.
pub struct Renderer {
    tera: Tera
}

impl Renderer {
    pub fn new() -> Result<Self, ConfigError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("socials.html", SOCIALS_TEMPLATE),
            ("head.html", HEAD_TEMPLATE)
        ])?;
        Ok(Self { tera })
    }

    /// Active social links as a list, in config order.
    pub fn socials(&self, config: &Config) -> Result<String, ConfigError> {
        let items: Vec<SocialItem> = config.active_socials().map(SocialItem::from).collect();
        debug!("Rendering {} of {} social links", items.len(), config.socials.len());
        let mut context = Context::new();
        context.insert("socials", &items);
        Ok(self.tera.render("socials.html", &context)?)
    }

    pub fn head(&self, config: &Config) -> Result<String, ConfigError> {
        let mut context = Context::new();
        context.insert("site", &config.site);
        context.insert("og_image", &og_image_url(config));
        context.insert("og_locale", &og_locale(config));
        Ok(self.tera.render("head.html", &context)?)
    }
}

pub fn render_socials(config: &Config) -> Result<String, ConfigError> {
    Renderer::new()?.socials(config)
}

pub fn render_head(config: &Config) -> Result<String, ConfigError> {
    Renderer::new()?.head(config)
}

/// `og_image` made absolute against `website`, unless it already is.
pub fn og_image_url(config: &Config) -> String {
    let image = &config.site.og_image;
    if image.contains("://") {
        return image.clone();
    }
    format!(
        "{}/{}",
        config.site.website.trim_end_matches('/'),
        image.trim_start_matches('/')
    )
}

fn og_locale(config: &Config) -> String {
    config
        .locale
        .resolve()
        .first()
        .map(|l| l.replace('-', "_"))
        .unwrap_or_default()
}
