use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polygraph::algorithm::{Dfs, LoggingVisitor};
use polygraph::element::{Edge, Registry, Vertex};
use polygraph::graph::*;
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, tree_backed, petgraph_directed, petgraph_undirected);
criterion_main!(benches);

fn tree_backed(c: &mut Criterion) {
    cases(c, ImplementationType::TreeBacked);
}

fn petgraph_directed(c: &mut Criterion) {
    cases(c, ImplementationType::PetgraphDirected);
}

fn petgraph_undirected(c: &mut Criterion) {
    cases(c, ImplementationType::PetgraphUndirected);
}

fn cases(c: &mut Criterion, implementation: ImplementationType) {
    let prefix = implementation.name();
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    let registry = Registry::new();

    c.bench_function(&format!("{}/add_vertex", prefix), |b| {
        b.iter(|| populate(implementation, &registry, vertex_size, 0))
    });
    c.bench_function(&format!("{}/add_vertex and add_edge", prefix), |b| {
        b.iter(|| populate(implementation, &registry, vertex_size, edge_size))
    });

    let (g, vertices, edges) = populate(implementation, &registry, vertex_size, edge_size);
    c.bench_function(&format!("{}/iter_vertices", prefix), |b| {
        b.iter(|| black_box(g.vertices().count()))
    });
    c.bench_function(&format!("{}/iter_edges", prefix), |b| {
        b.iter(|| black_box(g.edges().count()))
    });
    c.bench_function(&format!("{}/contains_vertex", prefix), |b| {
        b.iter(|| black_box(g.contains_vertex(pick(&vertices))))
    });
    c.bench_function(&format!("{}/out_edges", prefix), |b| {
        b.iter(|| black_box(g.out_edge_iterator(pick(&vertices)).map(|it| it.into_iter().count())))
    });
    c.bench_function(&format!("{}/dfs", prefix), |b| {
        b.iter(|| {
            let mut visitor = LoggingVisitor::new();
            black_box(Dfs::new(g.as_ref()).run(&mut visitor, Some(pick(&vertices))))
        })
    });
    c.bench_function(&format!("{}/remove_edges", prefix), |b| {
        let mut g = g.copy().unwrap();
        b.iter(|| {
            let e = pick(&edges);
            if g.contains_edge(e) {
                g.remove_edge(e).unwrap();
            }
        })
    });
    c.bench_function(&format!("{}/remove_vertices", prefix), |b| {
        let mut g = g.copy().unwrap();
        b.iter(|| {
            let v = pick(&vertices);
            if g.contains_vertex(v) {
                g.remove_vertex(v).unwrap();
            }
        })
    });
}

fn pick<T>(xs: &[T]) -> &T {
    &xs[rand::thread_rng().gen::<usize>() % xs.len()]
}

fn populate(
    implementation: ImplementationType,
    registry: &Registry,
    vertex_size: usize,
    edge_size: usize,
) -> (Box<dyn BaseGraph>, Vec<Vertex>, Vec<Edge>) {
    let mut g = instance(implementation, registry);
    let mut vertices = vec![];
    for i in 0..vertex_size {
        let v = Vertex::new(&i.to_string(), registry);
        g.add_vertex(&v).unwrap();
        vertices.push(v);
    }
    let mut edges = vec![];
    for i in 0..edge_size {
        let e = Edge::new(pick(&vertices), pick(&vertices), &i.to_string(), registry);
        g.add_edge(&e).unwrap();
        edges.push(e);
    }
    (g, vertices, edges)
}
