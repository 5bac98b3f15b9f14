//! Edit action creators.
//!
//! Each creator takes immutable inputs and returns an [`Outcome`]: the
//! article snapshot to keep (if it changed), the descriptor to reduce, and
//! the effects to run, in order.

use crate::article::{Article, Section, SectionKind};
use crate::effects::{Effect, ViewState};
use crate::error::EditorError;
use crate::ui::edit::intent::EditAction;
use crate::ui::edit::state::{EditError, EditorView};

const ARTICLES_PATH: &str = "/articles";

/// Result of an edit action.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    pub article: Option<Article>,
    pub action: Option<EditAction>,
    pub effects: Vec<Effect>,
}

impl Outcome {
    pub fn action(action: EditAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            ..Self::default()
        }
    }

    fn with_article(mut self, article: Article) -> Self {
        self.article = Some(article);
        self
    }

    fn then(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// URLs this outcome navigates to, in order.
    pub fn navigations(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Navigate(url) => Some(url.as_str()),
            _ => None,
        })
    }

    /// Number of save effects in this outcome.
    pub fn saves(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, Effect::Save(_)))
            .count()
    }
}

pub fn list_url(published: bool) -> String {
    format!("{ARTICLES_PATH}?published={published}")
}

pub fn edit_url(id: &str) -> String {
    format!("{ARTICLES_PATH}/{id}/edit")
}

pub fn change_saved_status(article: Article, is_saved: bool) -> Outcome {
    Outcome::action(EditAction::ChangeSavedStatus { article, is_saved })
}

pub fn set_section(section_index: usize) -> Outcome {
    Outcome::action(EditAction::SetSection { section_index })
}

pub fn change_view(active_view: EditorView) -> Outcome {
    Outcome::action(EditAction::ChangeView { active_view })
}

pub fn delete_article(article: &Article) -> Outcome {
    Outcome::action(EditAction::DeleteArticle { is_deleting: true })
        .then(Effect::Destroy(article.clone()))
}

pub fn redirect_to_list(published: bool) -> Outcome {
    Outcome::effect(Effect::Navigate(list_url(published)))
}

pub fn on_first_save(id: &str) -> Outcome {
    Outcome::effect(Effect::Navigate(edit_url(id)))
}

pub fn toggle_spinner(visible: bool) -> Outcome {
    Outcome::effect(Effect::ToggleSpinner(visible))
}

/// Save the article. Published articles also pick up the SEO keyword from
/// the page and return to the published list once the save is issued.
pub fn save_article(article: &Article, view: &dyn ViewState) -> Outcome {
    let mut next = article.clone();
    if article.published {
        apply_seo_keyword(&mut next, view);
    }

    let outcome = Outcome::action(EditAction::SaveArticle { is_saving: true })
        .then(Effect::Save(next.clone()))
        .with_article(next);

    if article.published {
        outcome.then(Effect::Navigate(list_url(true)))
    } else {
        outcome
    }
}

/// Flip the published flag and save. `publishing` marks a publish (as
/// opposed to an unpublish) and is when the SEO keyword is captured.
pub fn publish_article(article: &Article, publishing: bool, view: &dyn ViewState) -> Outcome {
    let published = !article.published;
    let mut next = article.clone();
    next.published = published;
    if publishing {
        apply_seo_keyword(&mut next, view);
    }

    Outcome::action(EditAction::PublishArticle {
        is_publishing: published,
    })
    .then(Effect::Save(next.clone()))
    .with_article(next)
}

/// Create a section from its wire type name.
pub fn new_section(section_type: &str) -> Result<Outcome, EditorError> {
    let kind: SectionKind = section_type.parse()?;
    Ok(new_section_of(kind))
}

pub fn new_section_of(kind: SectionKind) -> Outcome {
    Outcome::action(EditAction::NewSection {
        section: Section::template(kind),
    })
}

pub fn update_section(section_index: usize, section: Section) -> Outcome {
    Outcome::action(EditAction::UpdateSection {
        section_index,
        section,
    })
}

pub fn remove_section(section_index: usize) -> Outcome {
    Outcome::action(EditAction::RemoveSection { section_index })
}

pub fn log_error(error: EditError) -> Outcome {
    Outcome::action(EditAction::Error { error: Some(error) })
}

pub fn reset_error() -> Outcome {
    Outcome::action(EditAction::Error { error: None })
}

fn apply_seo_keyword(article: &mut Article, view: &dyn ViewState) {
    if let Some(keyword) = view.seo_keyword() {
        article.seo_keyword = Some(keyword);
    }
}
