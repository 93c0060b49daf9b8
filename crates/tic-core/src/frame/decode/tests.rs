use super::*;
use crate::frame::{encode_dataset, encode_frame};

fn ds(label: &str, data: &str) -> Event {
    Event::Dataset(Dataset::new(label, data))
}

#[test]
fn decodes_single_dataset_frame() {
    let mut dec = Decoder::default();
    let events = dec.feed(b"\x02\nADCO 999999999999 C\r\x03");
    assert_eq!(events, vec![ds("ADCO", "999999999999"), Event::EndOfFrame]);
    assert_eq!(dec.state(), State::WaitFrame);
}

#[test]
fn ignores_bytes_before_stx() {
    let mut dec = Decoder::default();
    let mut input = b"garbage\nADCO 1 X\r".to_vec();
    input.extend(encode_frame(&[Dataset::new("IINST", "002")], &Limits::default()).unwrap());
    assert_eq!(dec.feed(&input), vec![ds("IINST", "002"), Event::EndOfFrame]);
}

#[test]
fn masks_high_bit() {
    let mut dec = Decoder::default();
    let input: Vec<u8> = b"\x02\nADCO 999999999999 C\r\x03"
        .iter()
        .map(|b| b | 0x80)
        .collect();
    assert_eq!(
        dec.feed(&input),
        vec![ds("ADCO", "999999999999"), Event::EndOfFrame]
    );
}

#[test]
fn checksum_mismatch_resets_to_wait_frame() {
    let mut dec = Decoder::default();
    let events = dec.feed(b"\x02\nADCO 999999999999 D\r\nIINST 002 Y\r\x03");
    assert_eq!(
        events,
        vec![Event::Error(FrameError::ChecksumMismatch {
            label: "ADCO".into(),
            expected: b'C',
            received: b'D',
        })]
    );
    assert_eq!(dec.state(), State::WaitFrame);
}

#[test]
fn checksum_errors_can_be_silenced() {
    let mut dec = Decoder::default().with_checksum_errors(false);
    assert!(dec.feed(b"\x02\nADCO 999999999999 D\r").is_empty());
    assert_eq!(dec.state(), State::WaitFrame);
}

#[test]
fn label_overflow() {
    let mut dec = Decoder::default();
    let events = dec.feed(b"\x02\nLABELTOOLONG 1 X\r");
    assert_eq!(
        events,
        vec![Event::Error(FrameError::LabelTooLong { max: 8 })]
    );
}

#[test]
fn data_overflow_respects_custom_limits() {
    let limits = Limits {
        max_label_len: 8,
        max_data_len: 3,
    };
    let mut dec = Decoder::new(limits);
    let events = dec.feed(b"\x02\nPAPP 01250 X\r");
    assert_eq!(
        events,
        vec![Event::Error(FrameError::DataTooLong { max: 3 })]
    );
}

#[test]
fn missing_carriage_return() {
    let mut dec = Decoder::default();
    let events = dec.feed(b"\x02\nADCO 999999999999 C\n");
    assert_eq!(
        events,
        vec![Event::Error(FrameError::MissingCarriageReturn { found: LF })]
    );
    assert_eq!(dec.state(), State::WaitFrame);
}

#[test]
fn push_reports_states() {
    let mut dec = Decoder::default();
    let bytes = encode_dataset("HCHC", "012345678", &Limits::default()).unwrap();
    assert_eq!(dec.push(STX), None);
    assert_eq!(dec.state(), State::WaitDataset);
    let (last, head) = bytes.split_last().unwrap();
    for &b in head {
        assert_eq!(dec.push(b), None);
    }
    assert_eq!(dec.state(), State::EndOfDataset);
    assert_eq!(dec.push(*last), Some(ds("HCHC", "012345678")));
    assert_eq!(dec.state(), State::WaitDataset);
}

#[test]
fn split_input_across_feeds() {
    let frame = encode_frame(
        &[
            Dataset::new("ADCO", "999999999999"),
            Dataset::new("OPTARIF", "BASE"),
            Dataset::new("PAPP", "01250"),
        ],
        &Limits::default(),
    )
    .unwrap();
    let mut dec = Decoder::default();
    let mut events = Vec::new();
    for chunk in frame.chunks(3) {
        events.extend(dec.feed(chunk));
    }
    assert_eq!(
        events,
        vec![
            ds("ADCO", "999999999999"),
            ds("OPTARIF", "BASE"),
            ds("PAPP", "01250"),
            Event::EndOfFrame,
        ]
    );
}

#[test]
fn reset_drops_partial_dataset() {
    let mut dec = Decoder::default();
    dec.feed(b"\x02\nADC");
    assert_eq!(dec.state(), State::Label);
    dec.reset();
    assert_eq!(dec.state(), State::WaitFrame);
    assert!(dec.feed(b"\nADCO 999999999999 C\r").is_empty());
}

#[test]
fn huge_limits_do_not_preallocate() {
    let mut dec = Decoder::new(Limits {
        max_label_len: usize::MAX,
        max_data_len: usize::MAX,
    });
    assert_eq!(
        dec.feed(b"\x02\nADCO 999999999999 C\r\x03"),
        vec![ds("ADCO", "999999999999"), Event::EndOfFrame]
    );
}
