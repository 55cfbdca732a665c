//! Steps that open pages and check where the browser is.

use rstest_bdd_assert::{AssertionBehavior, Clock, Poller, SystemClock};
use url::Url;

use crate::{BrowserDriver, Presence, StepFailure, UiConfig};

/// Navigation and URL/title checks bound to one driver.
///
/// | phrase | method |
/// |---|---|
/// | `user opens URL "(.*)"` | [`navigate`](Self::navigate) |
/// | `user opens application URL` | [`navigate_to_base_url`](Self::navigate_to_base_url) |
/// | `user opens relative URL "(.*)"` | [`navigate_to_relative_url`](Self::navigate_to_relative_url) |
/// | `page "(.*)" should (be\|be not\|become\|become not) opened` | [`check_url`](Self::check_url) |
/// | `relative URL should (be\|be not\|become\|become not) "(.*)"` | [`check_relative_url`](Self::check_relative_url) |
/// | `page (should\|should not) contain "(.*)" URL` | [`check_url_contains`](Self::check_url_contains) |
/// | `page title should (be\|be not\|become\|become not) "(.*)"` | [`check_page_title`](Self::check_page_title) |
/// | `user resize window to (.*) height and (.*) width` | [`resize_window`](Self::resize_window) |
pub struct NavigationSteps<'d, D: ?Sized, C = SystemClock> {
    driver: &'d D,
    config: UiConfig,
    poller: Poller<C>,
}

impl<'d, D: BrowserDriver + ?Sized> NavigationSteps<'d, D> {
    /// Bind the steps to `driver`, polling with the process-wide
    /// configuration.
    #[must_use]
    pub fn new(driver: &'d D, config: UiConfig) -> Self {
        Self::with_poller(driver, config, Poller::default())
    }
}

impl<'d, D: BrowserDriver + ?Sized, C: Clock> NavigationSteps<'d, D, C> {
    /// Bind the steps to `driver` with an explicit poller.
    #[must_use]
    pub fn with_poller(driver: &'d D, config: UiConfig, poller: Poller<C>) -> Self {
        Self {
            driver,
            config,
            poller,
        }
    }

    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Driver`] when the backend rejects the request.
    pub fn navigate(&self, url: &str) -> Result<(), StepFailure> {
        log::debug!("navigating to {url}");
        self.driver.navigate(url)?;
        Ok(())
    }

    /// Open the configured application URL.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Driver`] when the backend rejects the request.
    pub fn navigate_to_base_url(&self) -> Result<(), StepFailure> {
        self.navigate(self.config.base_url().as_str())
    }

    /// Open `relative` resolved against the application URL.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Url`] when `relative` cannot be joined and
    /// [`StepFailure::Driver`] when the backend rejects the request.
    pub fn navigate_to_relative_url(&self, relative: &str) -> Result<(), StepFailure> {
        let target = self
            .config
            .resolve(relative)
            .map_err(|source| StepFailure::Url {
                url: relative.to_string(),
                source,
            })?;
        self.navigate(target.as_str())
    }

    /// Check the full URL of the current page.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Assertion`] when the URL does not satisfy
    /// `behavior`.
    pub fn check_url(&self, url: &str, behavior: AssertionBehavior) -> Result<(), StepFailure> {
        self.poller.try_should_become(
            || self.driver.current_url(),
            url.to_string(),
            behavior,
            "current URL",
        )?;
        Ok(())
    }

    /// Check the path and query of the current page.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Assertion`] when the path does not satisfy
    /// `behavior`.
    pub fn check_relative_url(
        &self,
        behavior: AssertionBehavior,
        relative: &str,
    ) -> Result<(), StepFailure> {
        self.poller.try_should_become(
            || {
                let current = self.driver.current_url()?;
                path_and_query(&current)
            },
            relative.to_string(),
            behavior,
            "relative URL",
        )?;
        Ok(())
    }

    /// Check whether the current URL contains `fragment`.
    ///
    /// The check keeps sampling until the outcome matches `presence` or the
    /// poll deadline passes.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Assertion`] when the URL never reaches the
    /// expected state.
    pub fn check_url_contains(
        &self,
        presence: Presence,
        fragment: &str,
    ) -> Result<(), StepFailure> {
        self.poller.try_should_become(
            || {
                self.driver
                    .current_url()
                    .map(|current| current.contains(fragment))
            },
            presence.expected_outcome(),
            AssertionBehavior::Become,
            format_args!("current URL contains {fragment:?}"),
        )?;
        Ok(())
    }

    /// Check the page title. `None` expects a page without a title.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Assertion`] when the title does not satisfy
    /// `behavior`.
    pub fn check_page_title(
        &self,
        behavior: AssertionBehavior,
        title: Option<&str>,
    ) -> Result<(), StepFailure> {
        self.poller.try_should_become(
            || self.driver.title(),
            title.map(str::to_owned),
            behavior,
            "page title",
        )?;
        Ok(())
    }

    /// Resize the browser window.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::Driver`] when the backend rejects the size.
    pub fn resize_window(&self, height: u32, width: u32) -> Result<(), StepFailure> {
        log::debug!("resizing window to {height}x{width} (height x width)");
        self.driver.resize_window(height, width)?;
        Ok(())
    }
}

/// Path plus `?query` of an absolute URL.
fn path_and_query(current: &str) -> Result<String, StepFailure> {
    let parsed = Url::parse(current).map_err(|source| StepFailure::Url {
        url: current.to_string(),
        source,
    })?;
    let mut relative = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        relative.push('?');
        relative.push_str(query);
    }
    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::path_and_query;
    use rstest::rstest;

    #[rstest]
    #[case("https://app.test/", "/")]
    #[case("https://app.test/inbox", "/inbox")]
    #[case("https://app.test/inbox?page=2&sort=asc", "/inbox?page=2&sort=asc")]
    #[case("https://app.test/inbox?", "/inbox?")]
    #[case("https://app.test/inbox#top", "/inbox")]
    fn extracts_path_and_query(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(path_and_query(url).ok().as_deref(), Some(expected));
    }

    #[test]
    fn rejects_relative_current_url() {
        assert!(path_and_query("/inbox").is_err());
    }
}
