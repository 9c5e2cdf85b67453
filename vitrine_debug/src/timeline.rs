// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON timeline export.
//!
//! [`export`] writes events from a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array with one object per event. Every object carries `seq`,
//! `kind`, and the event's own fields under `args`.

use std::io::{self, Write};

use serde_json::{Value, json};

use vitrine_core::trace::ImageStage;

use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(recorded: &RecordedEvent) -> Value {
    let (kind, args) = match recorded {
        RecordedEvent::Dispatch { event, .. } => ("dispatch", json!({ "event": event })),
        RecordedEvent::Slide {
            index, slide_count, ..
        } => (
            "slide",
            json!({ "index": index, "slide_count": slide_count }),
        ),
        RecordedEvent::Tab { index, .. } => ("tab", json!({ "index": index })),
        RecordedEvent::Modal { visible, .. } => ("modal", json!({ "visible": visible })),
        RecordedEvent::Sticky { sticky, .. } => ("sticky", json!({ "sticky": sticky })),
        RecordedEvent::Reveal { section, .. } => ("reveal", json!({ "section": section })),
        RecordedEvent::Image { image, stage, .. } => {
            let stage = match stage {
                ImageStage::Swapped => "swapped",
                ImageStage::Loaded => "loaded",
            };
            ("image", json!({ "image": image, "stage": stage }))
        }
        RecordedEvent::Rejected { reason, .. } => ("rejected", json!({ "reason": reason })),
    };
    json!({
        "seq": recorded.seq(),
        "kind": kind,
        "args": args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use vitrine_core::error::PageError;
    use vitrine_core::trace::{DispatchEvent, ModalEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_dispatch(&DispatchEvent {
            seq: 1,
            event: "open-modal",
        });
        rec.on_modal(&ModalEvent {
            seq: 1,
            visible: true,
        });
        rec.on_rejected(2, &PageError::InvalidSlide("x".into()));

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["kind"], "dispatch");
        assert_eq!(parsed[0]["args"]["event"], "open-modal");

        assert_eq!(parsed[1]["seq"], 1);
        assert_eq!(parsed[1]["args"]["visible"], true);

        assert_eq!(parsed[2]["kind"], "rejected");
        assert_eq!(parsed[2]["seq"], 2);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
