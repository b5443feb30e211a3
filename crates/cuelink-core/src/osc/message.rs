/// Expand a command template, substituting each `%d` with the decimal
/// channel value (e.g. `/cue/%d/go` with value 5 becomes `/cue/5/go`).
pub fn format_address(template: &str, value: u8) -> String {
    template.replace("%d", &value.to_string())
}

/// Encode an argument-less OSC 1.0 message: the address string followed by
/// the `,` type-tag string, each NUL-terminated and padded to a 4-byte
/// boundary.
pub fn encode_message(address: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(address.len() + 8);
    buf.extend_from_slice(address.as_bytes());
    pad(&mut buf);
    buf.push(b',');
    pad(&mut buf);
    buf
}

fn pad(buf: &mut Vec<u8>) {
    buf.push(0);
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_message, format_address};

    #[test]
    fn format_address_substitutes_value() {
        assert_eq!(format_address("/cue/%d/go", 12), "/cue/12/go");
    }

    #[test]
    fn format_address_without_placeholder() {
        assert_eq!(format_address("/panic", 12), "/panic");
    }

    #[test]
    fn format_address_with_repeated_placeholder() {
        assert_eq!(format_address("/%d/%d", 3), "/3/3");
    }

    #[test]
    fn encode_message_pads_to_four_bytes() {
        // "/go" needs one NUL to reach the boundary.
        assert_eq!(encode_message("/go"), b"/go\0,\0\0\0");
        // "/cue" is already aligned, so it gets a full NUL word.
        assert_eq!(encode_message("/cue"), b"/cue\0\0\0\0,\0\0\0");
    }

    #[test]
    fn encode_message_length_is_multiple_of_four() {
        for address in ["/a", "/ab", "/abc", "/abcd", "/cue/255/go"] {
            let message = encode_message(address);
            assert_eq!(message.len() % 4, 0, "{address}");
        }
    }
}
