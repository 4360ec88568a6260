//! The page aggregate.
//!
//! `Page` owns every piece of interaction state and turns one `Op` at a time
//! into the `Event`s the renderer needs. It is fully synchronous: anything
//! that has to wait (form delivery, the success timer) comes back as an
//! `Effect` for the runtime to carry out.

use crate::form::{ContactForm, SubmissionTicket, SubmitAttempt, SubmitOutcome};
use crate::nav::{HeaderVisibility, MobileMenu};
use crate::selection::{SkillSelection, ThemeState};
use crate::transport::TransportError;
use pf_protocol::{
    ContactFormData, Event, GlobalConfig, Op, PortfolioContent, SkillCategory, UiSnapshot,
};
use std::sync::Arc;
use tracing::debug;

/// Deferred work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver the form, then call `Page::on_delivered`.
    Deliver {
        ticket: SubmissionTicket,
        data: ContactFormData,
    },
    /// After the success display delay, call `Page::on_success_expired`.
    ExpireSuccess { ticket: SubmissionTicket },
}

/// Output of a single transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub events: Vec<Event>,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn event(event: Event) -> Self {
        Self {
            events: vec![event],
            effects: Vec::new(),
        }
    }

    fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.effects.is_empty()
    }
}

/// All interaction state of one page instance.
#[derive(Debug, Clone)]
pub struct Page {
    content: Arc<PortfolioContent>,
    header: HeaderVisibility,
    menu: MobileMenu,
    skills: SkillSelection,
    theme: ThemeState,
    form: ContactForm,
}

impl Page {
    pub fn new(content: Arc<PortfolioContent>, config: &GlobalConfig) -> Self {
        Self {
            content,
            header: HeaderVisibility::new(config.header.reveal_threshold),
            menu: MobileMenu::default(),
            skills: SkillSelection::default(),
            theme: ThemeState::default(),
            form: ContactForm::new(),
        }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn header(&self) -> &HeaderVisibility {
        &self.header
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            header_visible: self.header.visible(),
            mobile_menu_open: self.menu.is_open(),
            selected_skill: self.skills.selected(),
            theme: self.theme.theme(),
            form: self.form.data().clone(),
            errors: self.form.errors().clone(),
            is_submitting: self.form.is_submitting(),
            succeeded: self.form.succeeded(),
        }
    }

    /// Apply one input event.
    ///
    /// `Op::Shutdown` is handled by the runtime and is a no-op here.
    pub fn apply(&mut self, op: Op) -> Transition {
        match op {
            Op::Scroll { offset } => {
                let before = self.header.visible();
                let visible = self.header.on_scroll(offset);
                if visible == before {
                    Transition::none()
                } else {
                    Transition::event(Event::HeaderVisibilityChanged { visible })
                }
            }
            Op::ToggleMobileMenu => {
                let open = self.menu.toggle();
                Transition::event(Event::MobileMenuChanged { open })
            }
            Op::CloseMobileMenu => {
                if self.menu.close() {
                    Transition::event(Event::MobileMenuChanged { open: false })
                } else {
                    Transition::none()
                }
            }
            Op::SelectSkill { category } => self.select_skill(category),
            Op::ClearSkillSelection => {
                if self.skills.clear() {
                    Transition::event(Event::SkillSelectionChanged { selected: None })
                } else {
                    Transition::none()
                }
            }
            Op::ToggleTheme => Transition::event(self.theme.toggle()),
            Op::NavigateTo { section } => Transition::event(Event::ScrollRequested { section }),
            Op::EditField { field, value } => {
                self.form.edit_field(field, value);
                Transition::event(self.form_updated())
            }
            Op::Submit => self.submit(),
            Op::Shutdown => Transition::none(),
        }
    }

    fn select_skill(&mut self, category: SkillCategory) -> Transition {
        if self.content.skill(category).is_none() {
            debug!(%category, "selected skill category has no content");
        }
        if self.skills.select(category) {
            Transition::event(Event::SkillSelectionChanged {
                selected: Some(category),
            })
        } else {
            Transition::none()
        }
    }

    fn submit(&mut self) -> Transition {
        match self.form.begin_submit() {
            SubmitAttempt::Busy => Transition::none(),
            SubmitAttempt::Rejected => Transition::event(self.form_updated()),
            SubmitAttempt::Started { ticket, data } => Transition {
                events: vec![self.form_updated(), Event::SubmissionStarted],
                effects: vec![Effect::Deliver { ticket, data }],
            },
        }
    }

    /// Feed back the result of an `Effect::Deliver`.
    pub fn on_delivered(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), TransportError>,
    ) -> Transition {
        match self.form.complete_submit(ticket, result) {
            Some(SubmitOutcome::Succeeded) => Transition {
                events: vec![self.form_updated(), Event::SubmissionSucceeded],
                effects: vec![Effect::ExpireSuccess { ticket }],
            },
            Some(SubmitOutcome::Failed { message }) => Transition {
                events: vec![self.form_updated(), Event::SubmissionFailed { message }],
                effects: Vec::new(),
            },
            None => Transition::none(),
        }
    }

    /// Feed back an elapsed `Effect::ExpireSuccess`.
    pub fn on_success_expired(&mut self, ticket: SubmissionTicket) -> Transition {
        if self.form.expire_success(ticket) {
            debug!(ticket = ticket.id(), "success message expired");
            Transition::event(Event::SuccessExpired)
        } else {
            Transition::none()
        }
    }

    fn form_updated(&self) -> Event {
        Event::FormUpdated {
            data: self.form.data().clone(),
            errors: self.form.errors().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::templates::builtin_content;
    use pf_protocol::{FormField, Section, Theme};

    fn page() -> Page {
        Page::new(Arc::new(builtin_content().unwrap()), &GlobalConfig::default())
    }

    fn edit(page: &mut Page, field: FormField, value: &str) -> Transition {
        page.apply(Op::EditField {
            field,
            value: value.to_string(),
        })
    }

    #[test]
    fn test_scroll_emits_only_on_change() {
        let mut page = page();
        assert!(page.apply(Op::Scroll { offset: 10 }).is_empty());
        assert_eq!(
            page.apply(Op::Scroll { offset: 100 }).events,
            vec![Event::HeaderVisibilityChanged { visible: false }]
        );
        assert!(page.apply(Op::Scroll { offset: 200 }).is_empty());
        assert_eq!(
            page.apply(Op::Scroll { offset: 80 }).events,
            vec![Event::HeaderVisibilityChanged { visible: true }]
        );
    }

    #[test]
    fn test_menu_toggle_and_backdrop() {
        let mut page = page();
        assert_eq!(
            page.apply(Op::ToggleMobileMenu).events,
            vec![Event::MobileMenuChanged { open: true }]
        );
        assert_eq!(
            page.apply(Op::CloseMobileMenu).events,
            vec![Event::MobileMenuChanged { open: false }]
        );
        assert!(page.apply(Op::CloseMobileMenu).is_empty());
        assert!(!page.snapshot().mobile_menu_open);
    }

    #[test]
    fn test_skill_overlay() {
        let mut page = page();
        let t = page.apply(Op::SelectSkill {
            category: SkillCategory::Backend,
        });
        assert_eq!(
            t.events,
            vec![Event::SkillSelectionChanged {
                selected: Some(SkillCategory::Backend)
            }]
        );
        assert_eq!(page.snapshot().selected_skill, Some(SkillCategory::Backend));

        page.apply(Op::ClearSkillSelection);
        assert_eq!(page.snapshot().selected_skill, None);
    }

    #[test]
    fn test_skill_without_content_is_still_selected() {
        let mut content = builtin_content().unwrap();
        content.skills.retain(|s| s.category != SkillCategory::Tools);
        let mut page = Page::new(Arc::new(content), &GlobalConfig::default());

        let t = page.apply(Op::SelectSkill {
            category: SkillCategory::Tools,
        });
        assert_eq!(
            t.events,
            vec![Event::SkillSelectionChanged {
                selected: Some(SkillCategory::Tools)
            }]
        );
        assert_eq!(page.snapshot().selected_skill, Some(SkillCategory::Tools));
    }

    #[test]
    fn test_theme_and_navigation_are_effects() {
        let mut page = page();
        assert_eq!(
            page.apply(Op::ToggleTheme).events,
            vec![Event::ThemeChanged { theme: Theme::Dark }]
        );
        assert_eq!(page.snapshot().theme, Theme::Dark);

        let before = page.snapshot();
        assert_eq!(
            page.apply(Op::NavigateTo {
                section: Section::Contact
            })
            .events,
            vec![Event::ScrollRequested {
                section: Section::Contact
            }]
        );
        assert_eq!(page.snapshot(), before);
    }

    #[test]
    fn test_submit_requests_delivery() {
        let mut page = page();
        edit(&mut page, FormField::Name, "A");
        edit(&mut page, FormField::Email, "a@b.com");
        edit(&mut page, FormField::Message, "this is long enough");

        let t = page.apply(Op::Submit);
        assert_eq!(t.events.len(), 2);
        assert_eq!(t.events[1], Event::SubmissionStarted);
        let ticket = match &t.effects[..] {
            [Effect::Deliver { ticket, data }] => {
                assert_eq!(data.name, "A");
                *ticket
            }
            other => panic!("unexpected effects {other:?}"),
        };
        assert!(page.snapshot().is_submitting);

        // Re-entrant submit does nothing.
        assert!(page.apply(Op::Submit).is_empty());

        let t = page.on_delivered(ticket, Ok(()));
        assert_eq!(t.effects, vec![Effect::ExpireSuccess { ticket }]);
        let snapshot = page.snapshot();
        assert!(snapshot.succeeded && !snapshot.is_submitting);
        assert!(snapshot.form.is_empty());

        assert_eq!(page.on_success_expired(ticket).events, vec![Event::SuccessExpired]);
        assert!(!page.snapshot().succeeded);
    }

    #[test]
    fn test_invalid_submit_reports_errors() {
        let mut page = page();
        let t = page.apply(Op::Submit);

        assert!(t.effects.is_empty());
        match &t.events[..] {
            [Event::FormUpdated { errors, .. }] => assert_eq!(errors.len(), 3),
            other => panic!("unexpected events {other:?}"),
        }
    }
}
