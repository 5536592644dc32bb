use crate::application::ports::util::SlugGenerator;

/// Lowercases, strips everything except word characters, spaces and
/// hyphens, then collapses runs of spaces and hyphens into single hyphens.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let cleaned: String = input
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ' || *c == '-')
            .collect();

        let mut slug = String::with_capacity(cleaned.len());
        let mut pending_separator = false;
        for c in cleaned.trim().chars() {
            if c == ' ' || c == '-' {
                pending_separator = !slug.is_empty();
            } else {
                if pending_separator {
                    slug.push('-');
                    pending_separator = false;
                }
                slug.push(c);
            }
        }
        slug
    }
}
