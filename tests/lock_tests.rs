//! Tests for the input lock controller.

mod common;

use common::RecordingBlocker;
use pinlock::lock::InputLock;
use pinlock::model::InputLockState;

#[test]
fn engage_blocks_input_and_starts_locked() {
    let lock = InputLock::engage(RecordingBlocker::default());
    assert_eq!(lock.state(), InputLockState::Locked);
    assert!(lock.is_locked());
    assert_eq!(lock.blocker().calls, vec![true]);
}

#[test]
fn unlock_restores_input_once() {
    let mut lock = InputLock::engage(RecordingBlocker::default());
    lock.unlock();
    lock.unlock();
    assert_eq!(lock.state(), InputLockState::Unlocked);
    assert_eq!(lock.blocker().calls, vec![true, false]);
}

#[test]
fn lock_reasserts_while_locked() {
    let mut lock = InputLock::engage(RecordingBlocker::default());
    lock.lock();
    assert_eq!(lock.state(), InputLockState::Locked);
    assert_eq!(lock.blocker().calls, vec![true, true]);
}

#[test]
fn lock_after_unlock_is_a_no_op() {
    let mut lock = InputLock::engage(RecordingBlocker::default());
    lock.unlock();
    lock.lock();
    assert_eq!(lock.state(), InputLockState::Unlocked);
    assert_eq!(lock.blocker().calls, vec![true, false]);
}

#[test]
fn borrowed_blocker_sees_calls() {
    let mut blocker = RecordingBlocker::default();
    {
        let mut lock = InputLock::engage(&mut blocker);
        lock.unlock();
    }
    assert_eq!(blocker.calls, vec![true, false]);
}

#[test]
fn dropping_engaged_lock_does_not_unblock() {
    let mut blocker = RecordingBlocker::default();
    drop(InputLock::engage(&mut blocker));
    assert_eq!(blocker.calls, vec![true]);
}
