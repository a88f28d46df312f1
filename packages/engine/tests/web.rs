#![cfg(target_arch = "wasm32")]

use gravity_backdrop::{Backdrop, BackdropMount};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_runs_in_browser() {
    let mut backdrop = Backdrop::new(r#"{"seed": 1}"#).unwrap();
    backdrop.set_visible(true);
    backdrop.tick(js_sys::Date::now()).unwrap();
    assert_eq!(backdrop.body_count(), 8);
    assert_eq!(backdrop.root_margin(), "0px 0px -10% 0px");
}

#[wasm_bindgen_test]
fn bad_config_surfaces_as_js_error() {
    let err = Backdrop::new(r#"{"spawn": {"batch_size": 0}}"#).err().unwrap();
    assert!(err.as_string().unwrap().contains("batch_size"));
}

#[wasm_bindgen_test]
fn mount_and_unmount_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_attribute("style", "width: 400px; height: 200px").unwrap();
    document.body().unwrap().append_child(&element).unwrap();

    let mut mount = BackdropMount::mount(element.clone(), "{}", None).unwrap();
    assert!(mount.is_mounted());
    assert_eq!(mount.body_count(), 0);

    mount.unmount();
    assert!(!mount.is_mounted());
    assert!(!mount.is_running());
    mount.unmount();
    element.remove();
}

#[wasm_bindgen_test]
fn window_resize_refits_mounted_world() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_attribute("style", "width: 400px; height: 200px").unwrap();
    document.body().unwrap().append_child(&element).unwrap();

    let mut mount = BackdropMount::mount(element.clone(), "{}", None).unwrap();
    assert_eq!(mount.width(), 400.0);

    element.set_attribute("style", "width: 300px; height: 150px").unwrap();
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(mount.width(), 300.0);
    assert_eq!(mount.height(), 150.0);

    mount.unmount();
    element.remove();
}
