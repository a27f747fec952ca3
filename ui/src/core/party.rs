//! The two endpoints of an analysed connection.

use serde::{Deserialize, Serialize};

/// One side of the captured TCP connection, as labelled by the analysis tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Receiver,
    Sender,
}

impl Party {
    /// Rendering order whenever both parties are shown.
    pub const ALL: [Party; 2] = [Party::Receiver, Party::Sender];

    pub fn key(self) -> &'static str {
        match self {
            Party::Receiver => "receiver",
            Party::Sender => "sender",
        }
    }

    /// Fixed series color used by every chart.
    pub fn color(self) -> &'static str {
        match self {
            Party::Receiver => "#4C7AAF",
            Party::Sender => "#4CAF50",
        }
    }

    pub fn peer(self) -> Party {
        match self {
            Party::Receiver => Party::Sender,
            Party::Sender => Party::Receiver,
        }
    }
}

/// A value held once per party (`{"receiver": .., "sender": ..}` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parties<T> {
    pub receiver: T,
    pub sender: T,
}

impl<T> Parties<T> {
    pub fn get(&self, party: Party) -> &T {
        match party {
            Party::Receiver => &self.receiver,
            Party::Sender => &self.sender,
        }
    }

    pub fn map<'a, U>(&'a self, mut f: impl FnMut(Party, &'a T) -> U) -> Parties<U> {
        Parties {
            receiver: f(Party::Receiver, &self.receiver),
            sender: f(Party::Sender, &self.sender),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Party, &T)> {
        Party::ALL.into_iter().map(move |party| (party, self.get(party)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_differ_per_party() {
        assert_eq!(Party::Receiver.color(), "#4C7AAF");
        assert_eq!(Party::Sender.color(), "#4CAF50");
        assert_ne!(Party::Receiver.color(), Party::Sender.color());
    }

    #[test]
    fn iteration_is_receiver_first() {
        let parties = Parties {
            receiver: 1,
            sender: 2,
        };
        let order: Vec<_> = parties.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(order, vec![(Party::Receiver, 1), (Party::Sender, 2)]);
    }

    #[test]
    fn map_can_borrow_from_each_side() {
        let addresses = Parties {
            receiver: "10.0.0.1".to_string(),
            sender: "10.0.0.2".to_string(),
        };
        let borrowed: Parties<&str> = addresses.map(|_, ip| ip.as_str());
        assert_eq!(borrowed.receiver, "10.0.0.1");
        assert_eq!(*borrowed.get(Party::Sender), "10.0.0.2");
    }

    #[test]
    fn peer_swaps_roles() {
        assert_eq!(Party::Receiver.peer(), Party::Sender);
        assert_eq!(Party::Sender.peer().peer(), Party::Sender);
    }

    #[test]
    fn party_keys_match_wire_names() {
        let json = serde_json::to_string(&Party::Sender).unwrap();
        assert_eq!(json, "\"sender\"");
        assert_eq!(Party::Receiver.key(), "receiver");
    }
}
