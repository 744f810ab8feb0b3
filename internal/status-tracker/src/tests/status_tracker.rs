// Copyright 2022 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

#![allow(clippy::unwrap_used)]

use std::fmt::{self, Display, Formatter};

use crate::{log_item, ErrorBehavior, StatusTracker};

#[derive(Debug)]
struct SampleError {}

impl Display for SampleError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "SampleError")
    }
}

#[test]
fn aggregates_errors_when_continuing() {
    let mut tracker = StatusTracker::default();

    log_item!("test1", "test item 1", "test func").success(&mut tracker);

    // An error item should not stop the run under the default behavior.
    log_item!("test2", "test item 2", "test func")
        .failure(&mut tracker, SampleError {})
        .unwrap();

    assert_eq!(tracker.logged_items().len(), 2);
    assert_eq!(tracker.filter_errors().count(), 1);
    assert!(tracker.has_any_error());
}

#[test]
fn stops_on_first_error() {
    let mut tracker = StatusTracker::with_error_behavior(ErrorBehavior::StopOnFirstError);

    let result = log_item!("test1", "test item 1", "test func").failure(&mut tracker, SampleError {});
    assert!(result.is_err());
    assert_eq!(tracker.logged_items().len(), 1);
}

#[test]
fn has_status() {
    let mut tracker = StatusTracker::default();

    log_item!("test1", "test item 1", "test func")
        .validation_status("condition.audience.mismatch")
        .failure_no_throw(&mut tracker, SampleError {});

    assert!(tracker.has_status("condition.audience.mismatch"));
    assert!(!tracker.has_status("condition.unknown"));
}

#[test]
fn has_error() {
    let mut tracker = StatusTracker::default();

    log_item!("test1", "test item 1", "test func").failure_no_throw(&mut tracker, SampleError {});

    assert!(tracker.has_error(SampleError {}));
}

#[test]
fn append() {
    let mut tracker1 = StatusTracker::default();
    let mut tracker2 = StatusTracker::default();

    log_item!("test1", "test item 1", "test func").success(&mut tracker1);
    log_item!("test2", "test item 2", "test func").success(&mut tracker2);

    tracker1.append(&tracker2);
    assert_eq!(tracker1.logged_items().len(), 2);
}

#[test]
fn tracks_current_assertion_id() {
    let mut tracker = StatusTracker::default();

    tracker.push_current_assertion_id("abc123");
    log_item!("test1", "test item 1", "test func").success(&mut tracker);
    assert_eq!(tracker.pop_current_assertion_id().unwrap(), "abc123");

    log_item!("test2", "test item 2", "test func").success(&mut tracker);

    let items = tracker.logged_items();
    assert_eq!(items[0].assertion_id.as_deref(), Some("abc123"));
    assert_eq!(items[1].assertion_id, None);
}
