use crate::vocabulary::{KeyDataType, VocabularyKey};

/// Resolves an upstream social-profile type (e.g. `"LinkedIn"`) to the
/// vocabulary key its value should be stored under.
///
/// `None` means the type is unknown or unsupported; the mapper drops such
/// profiles without complaint.
pub trait SocialKeyResolver: Send + Sync {
    fn resolve(&self, profile_type: &str) -> Option<VocabularyKey>;
}

impl<F> SocialKeyResolver for F
where
    F: Fn(&str) -> Option<VocabularyKey> + Send + Sync,
{
    fn resolve(&self, profile_type: &str) -> Option<VocabularyKey> {
        self(profile_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Facebook,
    GooglePlus,
    Instagram,
    Foursquare,
    YouTube,
    Blogger,
    Flickr,
    GoodReads,
    TripIt,
    Tumblr,
    Vimeo,
    WordPress,
    Yahoo,
    Pinterest,
    Weibo,
    Xing,
    GitHub,
    StackOverflow,
    Klout,
    Gravatar,
    AngelCo,
    AboutMe,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 24] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::GooglePlus,
        SocialPlatform::Instagram,
        SocialPlatform::Foursquare,
        SocialPlatform::YouTube,
        SocialPlatform::Blogger,
        SocialPlatform::Flickr,
        SocialPlatform::GoodReads,
        SocialPlatform::TripIt,
        SocialPlatform::Tumblr,
        SocialPlatform::Vimeo,
        SocialPlatform::WordPress,
        SocialPlatform::Yahoo,
        SocialPlatform::Pinterest,
        SocialPlatform::Weibo,
        SocialPlatform::Xing,
        SocialPlatform::GitHub,
        SocialPlatform::StackOverflow,
        SocialPlatform::Klout,
        SocialPlatform::Gravatar,
        SocialPlatform::AngelCo,
        SocialPlatform::AboutMe,
    ];

    /// Local key name under the social-profiles prefix.
    pub fn key_name(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedIn",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::GooglePlus => "googlePlus",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Foursquare => "foursquare",
            SocialPlatform::YouTube => "youTube",
            SocialPlatform::Blogger => "blogger",
            SocialPlatform::Flickr => "flickr",
            SocialPlatform::GoodReads => "goodReads",
            SocialPlatform::TripIt => "tripIt",
            SocialPlatform::Tumblr => "tumblr",
            SocialPlatform::Vimeo => "vimeo",
            SocialPlatform::WordPress => "wordPress",
            SocialPlatform::Yahoo => "yahoo",
            SocialPlatform::Pinterest => "pinterest",
            SocialPlatform::Weibo => "weibo",
            SocialPlatform::Xing => "xing",
            SocialPlatform::GitHub => "gitHub",
            SocialPlatform::StackOverflow => "stackoverflow",
            SocialPlatform::Klout => "klout",
            SocialPlatform::Gravatar => "gravatar",
            SocialPlatform::AngelCo => "angelCo",
            SocialPlatform::AboutMe => "aboutMe",
        }
    }

    /// Match an upstream profile type, ignoring case and anything that is not
    /// a letter or digit (`"about.me"`, `"Google+"`, `"angel.co"`).
    pub fn from_profile_type(profile_type: &str) -> Option<Self> {
        let squashed: String = profile_type
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        let platform = match squashed.as_str() {
            "linkedin" => SocialPlatform::LinkedIn,
            "twitter" | "x" => SocialPlatform::Twitter,
            "facebook" | "fb" => SocialPlatform::Facebook,
            "googleplus" | "google" | "gplus" => SocialPlatform::GooglePlus,
            "instagram" => SocialPlatform::Instagram,
            "foursquare" => SocialPlatform::Foursquare,
            "youtube" => SocialPlatform::YouTube,
            "blogger" => SocialPlatform::Blogger,
            "flickr" => SocialPlatform::Flickr,
            "goodreads" => SocialPlatform::GoodReads,
            "tripit" => SocialPlatform::TripIt,
            "tumblr" => SocialPlatform::Tumblr,
            "vimeo" => SocialPlatform::Vimeo,
            "wordpress" => SocialPlatform::WordPress,
            "yahoo" => SocialPlatform::Yahoo,
            "pinterest" => SocialPlatform::Pinterest,
            "weibo" => SocialPlatform::Weibo,
            "xing" => SocialPlatform::Xing,
            "github" => SocialPlatform::GitHub,
            "stackoverflow" => SocialPlatform::StackOverflow,
            "klout" => SocialPlatform::Klout,
            "gravatar" => SocialPlatform::Gravatar,
            "angelco" | "angellist" => SocialPlatform::AngelCo,
            "aboutme" => SocialPlatform::AboutMe,
            _ => return None,
        };
        Some(platform)
    }
}

/// Social-profile keys nested under one vocabulary prefix.
#[derive(Debug, Clone)]
pub struct SocialLinksVocabulary {
    keys: Vec<(SocialPlatform, VocabularyKey)>,
}

impl SocialLinksVocabulary {
    pub fn under(prefix: &str) -> Self {
        Self {
            keys: SocialPlatform::ALL
                .iter()
                .map(|&platform| {
                    (
                        platform,
                        VocabularyKey::new(prefix, platform.key_name(), KeyDataType::Uri),
                    )
                })
                .collect(),
        }
    }

    pub fn key(&self, platform: SocialPlatform) -> Option<&VocabularyKey> {
        self.keys
            .iter()
            .find(|(candidate, _)| *candidate == platform)
            .map(|(_, key)| key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (SocialPlatform, &VocabularyKey)> {
        self.keys.iter().map(|(platform, key)| (*platform, key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &VocabularyKey> {
        self.keys.iter().map(|(_, key)| key)
    }
}

impl SocialKeyResolver for SocialLinksVocabulary {
    fn resolve(&self, profile_type: &str) -> Option<VocabularyKey> {
        SocialPlatform::from_profile_type(profile_type)
            .and_then(|platform| self.key(platform))
            .cloned()
    }
}
