use ant_automata::{Grid, Region, Simulation};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

fn main() {
    let grid = Grid::with_colony(40, 20, Some(Region::new(16, 8, 8, 4)));
    let mut simulation = Simulation::new(grid, 42, None);

    simulation.draw();
    println!("\nPress any key to advance one tick, q or Esc to quit.");

    loop {
        if let Event::Key(key) = event::read().unwrap() {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {
                    simulation.advance_tick();
                    simulation.draw();
                    println!("\nPress any key to advance one tick, q or Esc to quit.");
                }
            }
        }
    }
}
