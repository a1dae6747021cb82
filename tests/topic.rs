//! Integration tests exercising the public API end to end, the way two or
//! more independent participants would actually use it over a shared
//! transport.

use topical::{generate_topic_key, Error, Topic};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn scenario_shared_key_echo() {
    init_tracing();
    let topic_key = generate_topic_key();
    let alice = Topic::new(None, Some(topic_key));
    let mut bob = Topic::new(None, Some(topic_key));
    bob.add_participant(alice.public_key());

    let frame = alice.encode(b"Hi Bob!").unwrap();

    assert_eq!(bob.decode(&frame, false, false).unwrap().unwrap(), b"Hi Bob!");

    let bob_blind = Topic::new(None, Some(topic_key));
    assert_eq!(bob_blind.decode(&frame, false, true).unwrap(), None);
    assert_eq!(bob_blind.decode(&frame, true, false).unwrap().unwrap(), b"Hi Bob!");
}

#[test]
fn scenario_rogue_ephemeral() {
    let topic_key = generate_topic_key();
    let alice = Topic::new(None, Some(topic_key));
    let mut newcomer = Topic::new(None, None);

    let mut intro = newcomer.construct_intro();

    // Resign the frame over a substituted ephemeral key, keeping the
    // original signing_pub: this simulates an attacker who knows the
    // newcomer's long-term public key but not its secret.
    let mut rogue = Topic::new(None, None);
    let rogue_intro = rogue.construct_intro();
    intro[97..129].copy_from_slice(&rogue_intro[97..129]);

    assert!(matches!(alice.construct_reply(&intro), Err(Error::BadSignature)));
}

#[test]
fn scenario_full_discovery() {
    let topic_key = generate_topic_key();
    let mut alice = Topic::new(None, Some(topic_key));
    let mut bob = Topic::new(None, None);

    let intro = bob.construct_intro();
    let reply = alice.construct_reply(&intro).unwrap();
    assert!(bob.parse_reply(&reply).unwrap());

    alice.add_participant(bob.public_key());
    bob.add_participant(alice.public_key());

    for payload in [&b""[..], &b"x"[..], &vec![0x42u8; 65535][..]] {
        let frame = bob.encode(payload).unwrap();
        assert_eq!(alice.decode(&frame, false, false).unwrap().unwrap(), *payload);
    }
}

#[test]
fn scenario_cross_talk_rejection() {
    let topic_key = generate_topic_key();
    let alice = Topic::new(None, Some(topic_key));
    let carol = Topic::new(None, Some(topic_key));
    let mut bob = Topic::new(None, Some(topic_key));
    bob.add_participant(alice.public_key());

    let frame = carol.encode(b"from carol").unwrap();

    assert!(matches!(bob.decode(&frame, false, false), Err(Error::UntrustedKey)));
    assert_eq!(bob.decode(&frame, false, true).unwrap(), None);

    bob.add_participant(carol.public_key());
    assert_eq!(bob.decode(&frame, false, false).unwrap().unwrap(), b"from carol");
}

#[test]
fn scenario_wrong_recipient_reply() {
    let topic_key = generate_topic_key();
    let alice = Topic::new(None, Some(topic_key));
    let mut bob = Topic::new(None, None);
    let mut dave = Topic::new(None, None);

    let bob_intro = bob.construct_intro();
    let _dave_intro = dave.construct_intro();

    let reply = alice.construct_reply(&bob_intro).unwrap();

    assert_eq!(dave.parse_reply(&reply).unwrap(), false);
    assert!(bob.parse_reply(&reply).unwrap());
}

#[test]
fn scenario_type_tag_misrouting() {
    let topic_key = generate_topic_key();
    let bob = Topic::new(None, Some(topic_key));
    let mut newcomer = Topic::new(None, None);

    let intro = newcomer.construct_intro();
    assert!(matches!(bob.decode(&intro, false, false), Err(Error::IntroductionReceived)));

    let reply = bob.construct_reply(&intro).unwrap();
    assert!(matches!(bob.decode(&reply, false, false), Err(Error::ReplyReceived)));

    assert!(matches!(bob.decode(b"x", false, false), Err(Error::Malformed(_))));
}

#[test]
fn frozen_topic_key_survives_a_second_discovery() {
    let topic_key = generate_topic_key();
    let mut alice = Topic::new(None, Some(topic_key));
    let mut bob = Topic::new(None, None);

    let intro = bob.construct_intro();
    let reply = alice.construct_reply(&intro).unwrap();
    assert!(bob.parse_reply(&reply).unwrap());

    // A second, unrelated reply must not overwrite the established key.
    let other_key = generate_topic_key();
    let other = Topic::new(None, Some(other_key));
    let intro2 = bob.construct_intro();
    let reply2 = other.construct_reply(&intro2).unwrap();
    assert_eq!(bob.parse_reply(&reply2).unwrap(), false);

    bob.add_participant(alice.public_key());
    alice.add_participant(bob.public_key());
    let frame = bob.encode(b"still on the original key").unwrap();
    assert_eq!(
        alice.decode(&frame, false, false).unwrap().unwrap(),
        b"still on the original key"
    );
}
