use graph::{DagNode, GraphConfig, Grapher, Ref, RefIndex};

fn node(id: &str, parents: &[&str]) -> DagNode {
    DagNode::new(id, parents.iter().copied())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    println!("Lane Layout Demo");
    println!("================\n");

    // main merges a feature branch, which forked from a commit that is
    // itself a merge of a short-lived topic
    let history = vec![
        node("merge", &["main2", "feat2"]),
        node("feat2", &["feat1"]),
        node("main2", &["topic"]),
        node("feat1", &["main1"]),
        node("topic", &["main1", "side"]),
        node("side", &["main1"]),
        node("main1", &["root"]),
        node("root", &[]),
    ];

    let refs = RefIndex::from_refs(vec![
        Ref::Branch { id: "merge".into(), name: "main".into(), current: true },
        Ref::Head { id: "merge".into() },
        Ref::Branch { id: "feat2".into(), name: "feature".into(), current: false },
        Ref::Tag { id: "main1".into(), name: "v0.1".into() },
    ]);

    let config = GraphConfig::default();
    let mut grapher = Grapher::new(config.colors, refs);

    println!("Commit Layout:");
    println!("──────────────");
    for dag_node in &history {
        println!("{}", grapher.proceed(dag_node));
    }
}
