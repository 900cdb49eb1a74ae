use crate::config::GeneratorConfig;
use crate::error::DocsError;
use hromada_compositor::LogoCatalog;
use hromada_compositor::logos::{CANDID, POCACITO};
use hromada_layout::FontSet;
use hromada_traits::ResourceProvider;

/// Partner and sponsor logos with their file names in the partner
/// directory. White-background variants blend into the page.
pub const LOGO_FILES: &[(&str, &str)] = &[
    ("Ecoaction", "EcoactionLogo-white.png"),
    ("Ecoclub", "EcoclubLogo-white.png"),
    ("RePower Ukraine", "RePowerUkraineLogo-white.png"),
    ("Greenpeace CEE", "greenpeacelogo-white.png"),
    ("Energy Act For Ukraine", "energyactukrainelogo-white.png"),
    (POCACITO, "pocacitologo-white.png"),
    (CANDID, "candidseal.png"),
];

/// Fonts and images resolved once per run and shared by both documents.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub fonts: FontSet,
    pub logos: LogoCatalog,
}

impl Assets {
    /// Resolves fonts (falling back to Helvetica if any face is missing)
    /// and loads whichever logos exist.
    pub fn load(provider: &dyn ResourceProvider, config: &GeneratorConfig) -> Result<Self, DocsError> {
        let fonts = FontSet::load(provider, &config.font_dir)?;

        let logo_paths: Vec<(&str, String)> = LOGO_FILES
            .iter()
            .map(|(name, file)| (*name, config.partner_logo(file)))
            .collect();
        let logos = LogoCatalog::load(provider, &config.logo_path, &logo_paths)?;

        Ok(Self { fonts, logos })
    }
}
