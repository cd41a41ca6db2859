use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder().headless(true).build()?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    /// Inner text of every match, in document order.
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        self.tab.wait_for_element(selector)?;
        self.tab
            .find_elements(selector)?
            .iter()
            .map(|element| -> Result<String> { Ok(element.get_inner_text()?) })
            .collect()
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn hover(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.move_mouse_over()?;
        Ok(())
    }

    pub fn focus(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.focus()?;
        Ok(())
    }

    pub fn eval(&self, expression: &str) -> Result<Value> {
        let result = self.tab.evaluate(expression, false)?;
        result
            .value
            .with_context(|| format!("`{expression}` returned no value"))
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
