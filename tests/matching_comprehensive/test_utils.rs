//! Shared fixtures for the comprehensive suite

use std::sync::Arc;

use conceptmatch::{Analyzer, MemoryPersistence, ProjectId, RejectList, RejectLists};

/// Project id every fixture is stored under
pub const PROJECT: ProjectId = ProjectId(7);

/// Two-domain project: an electrical model and an invoicing class
pub const SNAPSHOT: &str = r#"{
    "concepts": [
        {
            "id": 1,
            "name": "BatteryPack",
            "attributes": [{ "name": "voltage", "identifier": "V" }],
            "classes": [{ "name": "Battery", "identifier": "bat" }]
        },
        {
            "id": 2,
            "name": "ElectricMotor",
            "attributes": [
                { "name": "speed", "identifier": "n" },
                { "name": "torque", "identifier": "M" }
            ],
            "links": [{ "qualifier": "part-of", "target": 1 }]
        },
        { "id": 3, "name": "Total" },
        { "id": 4, "name": "" }
    ],
    "methods": [
        {
            "id": 10,
            "class_name": "BatteryController",
            "signature": "double getVoltage(Battery battery)",
            "name": "getVoltage",
            "parameters": [{ "name": "battery", "type": "Battery" }]
        },
        {
            "id": 11,
            "class_name": "Invoice",
            "signature": "int computeTotal()",
            "name": "computeTotal"
        },
        {
            "id": 12,
            "class_name": "Drive",
            "signature": "void setMotorSpeed(int speed)",
            "name": "setMotorSpeed",
            "parameters": [{ "name": "speed", "type": "int" }],
            "references": [{ "name": "motorTorque", "type": "double", "origin": "field" }]
        }
    ]
}"#;

/// Store seeded with [`SNAPSHOT`]
pub fn store() -> Arc<MemoryPersistence> {
    let store = MemoryPersistence::new();
    store.load_json(PROJECT, SNAPSHOT).unwrap();
    Arc::new(store)
}

/// Analyzer over [`store`] with trees already built
pub fn analyzer() -> Analyzer {
    let analyzer = Analyzer::new(store());
    analyzer.rebuild_stem_trees(PROJECT).unwrap();
    analyzer
}

/// Reject lists dropping accessor verbs and primitive types
pub fn rejects() -> RejectLists {
    RejectLists {
        methods: RejectList::from_words(["get", "set", "compute"]),
        types: RejectList::from_words(["double", "int", "void"]),
        ..RejectLists::default()
    }
}
