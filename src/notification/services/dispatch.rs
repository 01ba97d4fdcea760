//! Template-driven notification dispatch.
//!
//! Message text is rendered once at dispatch time; recipients receive the
//! finished string, never the template. One notification is created per
//! recipient so read state stays individual.

use crate::auth::domain::EmailAddress;
use crate::notification::domain::{Notification, NotificationDraft};
use crate::notification::ports::{NotificationRepository, NotificationRepositoryError};
use crate::project::domain::Project;
use crate::task::domain::Comment;
use minijinja::Environment;
use mockable::Clock;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use thiserror::Error;

const MEMBER_ADDED: &str = "{{ actor }} added you to the project \"{{ project }}\"";
const COMMENT_ADDED: &str = "{{ author }} commented on \"{{ task }}\" in \"{{ project }}\"";
const FEEDBACK_LEFT: &str =
    "{{ author }} left feedback on \"{{ task }}\" (difficulty {{ difficulty }}/5)";

/// Errors surfaced by notification dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A message template failed to render.
    #[error("failed to render notification template: {reason}")]
    TemplateRender {
        /// Render failure description.
        reason: String,
    },

    /// The notification repository failed.
    #[error(transparent)]
    Repository(#[from] NotificationRepositoryError),
}

/// Renders notification messages and writes one record per recipient.
#[derive(Clone)]
pub struct NotificationDispatcher<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    notifications: Arc<N>,
    clock: Arc<C>,
}

impl<N, C> NotificationDispatcher<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dispatcher.
    #[must_use]
    pub const fn new(notifications: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            notifications,
            clock,
        }
    }

    /// Notifies each newly added member of a project.
    ///
    /// Driven by the membership diff between consecutive snapshots; an
    /// empty diff writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when rendering or persistence fails.
    pub async fn member_added(
        &self,
        project: &Project,
        added: &[EmailAddress],
        actor: &str,
    ) -> Result<Vec<Notification>, DispatchError> {
        let mut context = Map::new();
        context.insert("actor".to_owned(), json!(actor));
        context.insert("project".to_owned(), json!(project.title()));
        let message = render(MEMBER_ADDED, &context)?;

        self.fan_out(project, added, &message).await
    }

    /// Notifies project members of a new comment or attached feedback.
    ///
    /// The comment author is excluded from the recipients. A comment that
    /// carries feedback renders the feedback message instead.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when rendering or persistence fails.
    pub async fn comment_added(
        &self,
        project: &Project,
        task_title: &str,
        comment: &Comment,
    ) -> Result<Vec<Notification>, DispatchError> {
        let mut context = Map::new();
        context.insert("author".to_owned(), json!(comment.author_name()));
        context.insert("task".to_owned(), json!(task_title));
        context.insert("project".to_owned(), json!(project.title()));
        let message = match comment.feedback() {
            Some(feedback) => {
                context.insert("difficulty".to_owned(), json!(feedback.difficulty()));
                render(FEEDBACK_LEFT, &context)?
            }
            None => render(COMMENT_ADDED, &context)?,
        };

        let recipients: Vec<EmailAddress> = project
            .members()
            .iter()
            .filter(|member| *member != comment.author_email())
            .cloned()
            .collect();
        self.fan_out(project, &recipients, &message).await
    }

    async fn fan_out(
        &self,
        project: &Project,
        recipients: &[EmailAddress],
        message: &str,
    ) -> Result<Vec<Notification>, DispatchError> {
        let mut created = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            let notification = Notification::create(
                NotificationDraft {
                    project_id: project.id(),
                    recipient: recipient.clone(),
                    message: message.to_owned(),
                },
                self.clock.as_ref(),
            );
            self.notifications.create(&notification).await?;
            created.push(notification);
        }
        Ok(created)
    }
}

fn render(template: &str, context: &Map<String, Value>) -> Result<String, DispatchError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map_err(|err| DispatchError::TemplateRender {
            reason: err.to_string(),
        })
}
