use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

#[tokio::test]
#[ignore = "needs Chrome and the web server; run with --ignored"]
async fn test_steps_grid_lists_four_steps_in_order() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    let titles = page.texts(".step_title").expect("Tiles should render");
    assert_eq!(titles, vec!["REGISTER", "DAILY QUESTION", "COMPETE", "REPEAT"]);

    let numbers = page.texts(".step_number").expect("Tiles should render");
    assert_eq!(numbers, vec!["01", "02", "03", "04"]);
}

#[tokio::test]
#[ignore = "needs Chrome and the web server; run with --ignored"]
async fn test_scroll_prompt_brings_steps_into_view() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click("button.scroll_prompt").expect("Failed to click");
    tokio::time::sleep(Duration::from_secs(2)).await;

    let scrolled = page.eval("window.scrollY").expect("scrollY");
    assert!(scrolled.as_f64().unwrap_or_default() > 0.0, "Page should scroll");
}

#[tokio::test]
#[ignore = "needs Chrome and the web server; run with --ignored"]
async fn test_hovering_a_tile_reveals_its_description() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    let opacity = r#"getComputedStyle(document.querySelector(".step_description")).opacity"#;

    page.hover(".step_tile").expect("Failed to hover");
    tokio::time::sleep(Duration::from_secs(1)).await;
    let shown = page.eval(opacity).expect("opacity");
    assert_eq!(shown.as_str(), Some("1"));

    page.hover(".hero_title").expect("Failed to move away");
    tokio::time::sleep(Duration::from_secs(1)).await;
    let hidden = page.eval(opacity).expect("opacity");
    assert_eq!(hidden.as_str(), Some("0"));
}

#[tokio::test]
#[ignore = "needs Chrome and the web server; run with --ignored"]
async fn test_focusing_a_tile_reveals_its_description() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.focus(".step_tile").expect("Tiles should be focusable");
    tokio::time::sleep(Duration::from_secs(1)).await;

    let shown = page
        .eval(r#"getComputedStyle(document.querySelector(".step_description")).opacity"#)
        .expect("opacity");
    assert_eq!(shown.as_str(), Some("1"));
}
