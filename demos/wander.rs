use ant_automata::{Grid, Simulation};

fn main() {
    let map = "\
        rows 12
        cols 20
        m ####################
        m #..................#
        m #..AAAA.....#......#
        m #..AAAA.....#......#
        m #..AAAA.....#......#
        m #...........#......#
        m #......##...#...@..#
        m #.......#..........#
        m #.N.....#..........#
        m #.......#..........#
        m #..................#
        m ####################";

    let replay_filename = "/tmp/wander_replay.json".to_string();
    let mut simulation = Simulation::new(Grid::parse(map), 0, Some(replay_filename.clone()));

    for _ in 0..500 {
        simulation.advance_tick();
    }

    simulation.save_replay();
    simulation.draw();

    println!(
        "\nRan {} ticks with {} ants; replay saved to {}",
        simulation.current_tick(),
        simulation.grid().ant_count(),
        replay_filename
    );
}
