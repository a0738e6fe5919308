//! Copying the rendered code, and telling the user how it went.
//!
//! Clipboard writes are fire-and-forget: the write is started, and a
//! completion callback later reports success or failure to a [`Notifier`].
//! Both outcomes are shown; a failed copy is never dropped silently.

use std::rc::Rc;

use crate::error::LabError;

/// Completion callback of a clipboard write.
pub type CopyCallback = Box<dyn FnOnce(Result<(), LabError>)>;

/// System clipboard.
pub trait Clipboard {
    /// Start writing `text`; `done` runs once the write settles, possibly
    /// after this call returns.
    fn write_text(&self, text: &str, done: CopyCallback);
}

/// Messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The code snippet is on the clipboard.
    CodeCopied,
    /// The clipboard refused the snippet.
    CopyFailed(String),
}

impl Notice {
    /// Text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Notice::CodeCopied => "Code copied!".to_owned(),
            Notice::CopyFailed(reason) => {
                format!("Could not copy code: {reason}")
            }
        }
    }
}

/// Shows [`Notice`]s to the user.
pub trait Notifier {
    /// Display `notice`.
    fn notify(&self, notice: &Notice);
}

/// Notifier that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::CodeCopied => log::info!("{}", notice.message()),
            Notice::CopyFailed(_) => log::warn!("{}", notice.message()),
        }
    }
}

/// Write `code` to `clipboard` and report the outcome through `notifier`.
pub fn copy_code<C: Clipboard + ?Sized>(
    code: &str,
    clipboard: &C,
    notifier: Rc<dyn Notifier>,
) {
    clipboard.write_text(
        code,
        Box::new(move |result| {
            let notice = match result {
                Ok(()) => Notice::CodeCopied,
                Err(e) => {
                    log::error!("clipboard write failed: {e}");
                    Notice::CopyFailed(e.to_string())
                }
            };
            notifier.notify(&notice);
        }),
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Clipboard that settles immediately, or holds the callback until
    /// `settle` when deferred.
    pub(crate) struct FakeClipboard {
        pub(crate) fail_with: Option<String>,
        pub(crate) written: RefCell<Vec<String>>,
        pub(crate) pending: RefCell<Option<CopyCallback>>,
        pub(crate) deferred: bool,
    }

    impl FakeClipboard {
        pub(crate) fn working() -> Self {
            Self {
                fail_with: None,
                written: RefCell::new(Vec::new()),
                pending: RefCell::new(None),
                deferred: false,
            }
        }

        pub(crate) fn settle(&self) {
            if let Some(done) = self.pending.borrow_mut().take() {
                done(self.result());
            }
        }

        fn result(&self) -> Result<(), LabError> {
            self.fail_with
                .clone()
                .map_or(Ok(()), |msg| Err(LabError::Clipboard(msg)))
        }
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&self, text: &str, done: CopyCallback) {
            self.written.borrow_mut().push(text.to_owned());
            if self.deferred {
                *self.pending.borrow_mut() = Some(done);
            } else {
                done(self.result());
            }
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeNotifier {
        pub(crate) seen: RefCell<Vec<Notice>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, notice: &Notice) {
            self.seen.borrow_mut().push(notice.clone());
        }
    }

    #[test]
    fn success_is_confirmed() {
        let clipboard = FakeClipboard::working();
        let notifier = Rc::new(FakeNotifier::default());
        copy_code("anime({});", &clipboard, notifier.clone());
        assert_eq!(*clipboard.written.borrow(), ["anime({});"]);
        assert_eq!(*notifier.seen.borrow(), [Notice::CodeCopied]);
    }

    #[test]
    fn failure_is_reported() {
        let mut clipboard = FakeClipboard::working();
        clipboard.fail_with = Some("permission denied".to_owned());
        let notifier = Rc::new(FakeNotifier::default());
        copy_code("x", &clipboard, notifier.clone());
        let seen = notifier.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(matches!(
            &seen[0],
            Notice::CopyFailed(msg) if msg.contains("permission denied")
        ));
    }

    #[test]
    fn notice_arrives_when_write_settles() {
        let mut clipboard = FakeClipboard::working();
        clipboard.deferred = true;
        let notifier = Rc::new(FakeNotifier::default());
        copy_code("x", &clipboard, notifier.clone());
        assert!(notifier.seen.borrow().is_empty());
        clipboard.settle();
        assert_eq!(*notifier.seen.borrow(), [Notice::CodeCopied]);
    }
}
