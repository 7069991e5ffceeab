use anyhow::Result;
use serde::{Deserialize, Serialize};
use seqkit::{linked_list, vector, LinkedList, Vector};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Playlist {
    name: String,
    tracks: LinkedList<u32>,
    ratings: Vector<u8>,
}

#[test]
fn test_nested_containers_round_trip() -> Result<()> {
    let playlist = Playlist {
        name: "mix".to_string(),
        tracks: linked_list![7, 3, 9],
        ratings: vector![5, 4],
    };
    let json = serde_json::to_string(&playlist)?;
    assert_eq!(json, r#"{"name":"mix","tracks":[7,3,9],"ratings":[5,4]}"#);
    let back: Playlist = serde_json::from_str(&json)?;
    assert_eq!(back, playlist);
    Ok(())
}

#[test]
fn test_deserialized_vector_grows_normally() -> Result<()> {
    let v: Vector<i32> = serde_json::from_str("[1,2,3,4,5,6]")?;
    assert_eq!(v.len(), 6);
    assert_eq!(v.capacity(), 8);
    Ok(())
}

#[test]
fn test_deserialized_list_has_working_cursors() -> Result<()> {
    let list: LinkedList<String> = serde_json::from_str(r#"["a","b"]"#)?;
    let second = (list.cbegin() + 1)?;
    assert_eq!(second.get()?, "b");
    assert_eq!((second + 1)?, list.cend());
    Ok(())
}

#[test]
fn test_wrong_element_type_is_rejected() {
    assert!(serde_json::from_str::<Vector<u8>>("[1,300]").is_err());
    assert!(serde_json::from_str::<LinkedList<u8>>(r#"["x"]"#).is_err());
}
