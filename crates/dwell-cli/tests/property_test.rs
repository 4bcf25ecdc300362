mod common;

use dwell_testing::TestWorld;

#[test]
fn test_property_list_json() {
    let (world, _) = common::seeded_world();

    let json = world.run_json(&["property", "list"]).unwrap();

    insta::assert_json_snapshot!(json, @r###"
    {
      "badge": {
        "label": "1 properties",
        "level": "success"
      },
      "content": {
        "properties": [
          {
            "created_at": "2025-03-01T08:00:00.000Z",
            "id": "villa-7",
            "session_count": 3,
            "title": "Villa 7",
            "view_count": 3
          }
        ],
        "total": 1
      },
      "suggestions": [
        {
          "command": "dwell report list",
          "description": "Compare engagement"
        }
      ]
    }
    "###);
}

#[test]
fn test_property_list_quiet() {
    let (world, _) = common::seeded_world();

    let result = world.run(&["property", "list", "--quiet"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "villa-7\n");
}

#[test]
fn test_property_list_empty() {
    let world = TestWorld::new().initialized();

    let result = world.run(&["property", "list"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("No properties tracked yet"));
    assert!(result.stdout().contains("No properties found."));
}
