//! End-to-end decode and extraction properties over packed wire buffers.

use cuelink_core::protocols::sacn::layout;
use cuelink_core::{
    DataPacket, DecodeError, DmpLayer, FramingLayer, PacketField, PacketLayer, RootLayer,
    RoutingError, decode, extract_channel,
};

/// A packet satisfying every decode invariant: universe 1, three property
/// values `[0x00, 0x00, 0xff]` (start code plus channels 1 and 2).
fn sample_packet() -> DataPacket {
    let mut source = [0u8; 64];
    source[..7].copy_from_slice(b"Console");
    let mut property_values = [0u8; layout::PROPERTY_VALUES_LEN];
    property_values[2] = 0xff;

    DataPacket {
        root: RootLayer {
            preamble_size: layout::PREAMBLE_SIZE,
            postamble_size: layout::POSTAMBLE_SIZE,
            packet_identifier: *layout::ACN_PID,
            flags_and_length: layout::PDU_FLAGS | 0x026e,
            vector: layout::ROOT_VECTOR_DATA,
            cid: [0x11; 16],
        },
        framing: FramingLayer {
            flags_and_length: layout::PDU_FLAGS | 0x0258,
            vector: layout::FRAMING_VECTOR_DMX,
            source,
            priority: 100,
            sync_address: 0,
            sequence_number: 7,
            options: 0,
            universe: 1,
        },
        dmp: DmpLayer {
            flags_and_length: layout::PDU_FLAGS | 0x020b,
            vector: layout::DMP_VECTOR_SET_PROPERTY,
            address_and_data_type: layout::DMP_ADDRESS_AND_DATA_TYPE,
            first_property_address: layout::DMP_FIRST_PROPERTY_ADDRESS,
            address_increment: layout::DMP_ADDRESS_INCREMENT,
            property_value_count: 3,
            property_values,
        },
    }
}

#[test]
fn round_trip_preserves_every_field() {
    let packet = sample_packet();
    let decoded = decode(&packet.pack()).unwrap();
    assert_eq!(decoded, packet);
}

#[test]
fn round_trip_preserves_unchecked_fields() {
    // priority, sequence, sync address, and cid are carried verbatim even
    // though no invariant constrains them.
    let mut packet = sample_packet();
    packet.framing.priority = 200;
    packet.framing.sequence_number = 0xab;
    packet.framing.sync_address = 7962;
    packet.root.cid = *b"0123456789abcdef";

    let decoded = decode(&packet.pack()).unwrap();
    assert_eq!(decoded, packet);
}

#[test]
fn every_shorter_prefix_is_truncated() {
    let payload = sample_packet().pack();
    for len in 0..layout::PACKET_LEN {
        assert_eq!(
            decode(&payload[..len]),
            Err(DecodeError::Truncated {
                needed: layout::PACKET_LEN,
                actual: len,
            }),
            "prefix length {len}"
        );
    }
}

#[test]
fn trailing_bytes_beyond_layout_are_ignored() {
    let mut payload = sample_packet().pack().to_vec();
    payload.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(decode(&payload).unwrap(), sample_packet());
}

#[test]
fn decoding_twice_yields_equal_packets() {
    let payload = sample_packet().pack();
    assert_eq!(decode(&payload).unwrap(), decode(&payload).unwrap());
}

#[test]
fn each_invariant_is_attributed_to_its_field() {
    let cases: Vec<(&str, fn(&mut DataPacket), PacketLayer, PacketField)> = vec![
        (
            "root preamble size",
            |p| p.root.preamble_size = 0x0000,
            PacketLayer::Root,
            PacketField::PreambleSize,
        ),
        (
            "root postamble size",
            |p| p.root.postamble_size = 0x0010,
            PacketLayer::Root,
            PacketField::PostambleSize,
        ),
        (
            "root packet identifier",
            |p| p.root.packet_identifier = *b"ASC-E9.99\0\0\0",
            PacketLayer::Root,
            PacketField::PacketIdentifier,
        ),
        (
            "root flags",
            |p| p.root.flags_and_length = 0x126e,
            PacketLayer::Root,
            PacketField::Flags,
        ),
        (
            "root vector",
            |p| p.root.vector = 0x0000_0008,
            PacketLayer::Root,
            PacketField::Vector,
        ),
        (
            "framing flags",
            |p| p.framing.flags_and_length = 0x0258,
            PacketLayer::Framing,
            PacketField::Flags,
        ),
        (
            "framing vector",
            |p| p.framing.vector = 0x0000_0001,
            PacketLayer::Framing,
            PacketField::Vector,
        ),
        (
            "framing options",
            |p| p.framing.options = 0x40,
            PacketLayer::Framing,
            PacketField::Options,
        ),
        (
            "DMP flags",
            |p| p.dmp.flags_and_length = 0xf20b,
            PacketLayer::Dmp,
            PacketField::Flags,
        ),
        (
            "DMP vector",
            |p| p.dmp.vector = 0x01,
            PacketLayer::Dmp,
            PacketField::Vector,
        ),
        (
            "DMP address & data type",
            |p| p.dmp.address_and_data_type = 0xa2,
            PacketLayer::Dmp,
            PacketField::AddressType,
        ),
        (
            "DMP first property address",
            |p| p.dmp.first_property_address = 0x0001,
            PacketLayer::Dmp,
            PacketField::FirstPropertyAddress,
        ),
        (
            "DMP address increment",
            |p| p.dmp.address_increment = 0x0002,
            PacketLayer::Dmp,
            PacketField::AddressIncrement,
        ),
        (
            "DMX start code",
            |p| p.dmp.property_values[0] = 0x01,
            PacketLayer::Dmp,
            PacketField::StartCode,
        ),
    ];

    for (name, mutate, layer, field) in cases {
        let mut packet = sample_packet();
        mutate(&mut packet);
        assert_eq!(
            decode(&packet.pack()),
            Err(DecodeError::MalformedField { layer, field }),
            "{name}"
        );
    }
}

#[test]
fn extraction_returns_value_and_source() {
    let packet = decode(&sample_packet().pack()).unwrap();
    let reading = extract_channel(&packet, 1, 2).unwrap();
    assert_eq!(reading.value, 0xff);
    assert_eq!(reading.source, "Console");
}

#[test]
fn extraction_rejects_other_universe() {
    let packet = decode(&sample_packet().pack()).unwrap();
    assert_eq!(
        extract_channel(&packet, 2, 2),
        Err(RoutingError::UniverseMismatch { want: 2, actual: 1 })
    );
}

#[test]
fn nonzero_start_code_is_malformed() {
    let mut packet = sample_packet();
    packet.dmp.property_values[0] = 0x01;
    assert_eq!(
        decode(&packet.pack()),
        Err(DecodeError::MalformedField {
            layer: PacketLayer::Dmp,
            field: PacketField::StartCode,
        })
    );
}

#[test]
fn channel_boundary_with_five_property_values() {
    let mut packet = sample_packet();
    packet.dmp.property_value_count = 5;
    packet.dmp.property_values[4] = 0x2a;
    let packet = decode(&packet.pack()).unwrap();

    assert_eq!(extract_channel(&packet, 1, 4).unwrap().value, 0x2a);
    assert_eq!(
        extract_channel(&packet, 1, 5),
        Err(RoutingError::ChannelOutOfRange {
            channel: 5,
            count: 5
        })
    );
    // Channel 0 addresses the start code, which a validated packet always
    // carries as 0x00.
    assert_eq!(extract_channel(&packet, 1, 0).unwrap().value, 0x00);
}
