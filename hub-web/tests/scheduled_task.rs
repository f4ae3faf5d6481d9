//! WASM browser tests for the owned loading timer
//!
//! Run with: wasm-pack test --headless --firefox hub-web

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use hub_web::services::timer::ScheduledTask;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const DELAY_MS: u32 = 30;
const SETTLE_MS: u32 = 150;

#[wasm_bindgen_test]
async fn test_task_fires_while_held() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();

    let _task = ScheduledTask::schedule(DELAY_MS, move || flag.set(true)).expect("schedule");

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(fired.get());
}

#[wasm_bindgen_test]
async fn test_dropped_task_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();

    let task = ScheduledTask::schedule(DELAY_MS, move || flag.set(true)).expect("schedule");
    drop(task);

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn test_cancelled_task_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();

    let task = ScheduledTask::schedule(DELAY_MS, move || flag.set(true)).expect("schedule");
    task.cancel();

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(!fired.get());
}
