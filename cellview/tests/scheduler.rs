use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cellview::prelude::*;

#[test]
fn test_deferred_command_not_invoked_synchronously() {
    let (scheduler, mut queue) = command_channel();
    let order = Arc::new(Mutex::new(Vec::new()));

    let recorder = Arc::clone(&order);
    reset_focus(
        &scheduler,
        Box::new(move || recorder.lock().unwrap().push("deferred")),
    );
    order.lock().unwrap().push("after-call");

    queue.drain();
    assert_eq!(*order.lock().unwrap(), vec!["after-call", "deferred"]);
}

#[test]
fn test_deferred_command_runs_exactly_once() {
    let (scheduler, mut queue) = command_channel();
    let runs = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&runs);
    scheduler.schedule_deferred(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    assert_eq!(queue.drain(), 1);
    assert_eq!(queue.drain(), 0);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_commands_run_in_fifo_order() {
    let (scheduler, mut queue) = command_channel();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let recorder = Arc::clone(&order);
        scheduler.schedule_deferred(Box::new(move || recorder.lock().unwrap().push(label)));
    }

    assert_eq!(queue.drain(), 3);
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn test_command_scheduled_during_drain_waits_for_next_turn() {
    let (scheduler, mut queue) = command_channel();
    let runs = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&runs);
    let rescheduler = scheduler.clone();
    scheduler.schedule_deferred(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        let counter = Arc::clone(&counter);
        rescheduler.schedule_deferred(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
    }));

    assert_eq!(queue.drain(), 1);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(queue.drain(), 1);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn test_focus_handle_without_scheduler_drops_command() {
    let handle = FocusHandle::new();
    let runs = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&runs);
    handle.reset_focus(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[test]
fn test_focus_handle_defers_after_install() {
    let (scheduler, mut queue) = command_channel();
    let handle = FocusHandle::new();
    handle.install(Arc::new(scheduler));

    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    handle.reset_focus(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(queue.drain(), 1);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cloned_handles_share_installed_scheduler() {
    let (scheduler, mut queue) = command_channel();
    let handle = FocusHandle::new();
    let clone = handle.clone();
    handle.install(Arc::new(scheduler));

    clone.reset_focus(Box::new(|| {}));
    assert_eq!(queue.drain(), 1);
}

#[tokio::test]
async fn test_recv_hands_command_to_async_host() {
    let (scheduler, mut queue) = command_channel();
    let runs = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&runs);
    scheduler.schedule_deferred(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let command = queue.recv().await.expect("scheduled command");
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    command();
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_recv_ends_when_schedulers_dropped() {
    let (scheduler, mut queue) = command_channel();
    drop(scheduler);
    assert!(queue.recv().await.is_none());
}
