use brain::Drawable;
use std::{
    collections::hash_map::DefaultHasher,
    error::Error,
    hash::{Hash, Hasher},
};

const PRINT_ORIGIN: (f32, f32) = (25.0, 25.0);
const PRINT_LINE_HEIGHT: f32 = 30.0;
const TEXT_SCALE: (i32, i32) = (2, 2);

/// Draw one tick's worth of drawables in-game, replacing whatever this bot
/// drew last tick.
pub fn render(rlbot: &rlbot::RLBot, drawables: &[Drawable]) -> Result<(), Box<dyn Error>> {
    let mut group = rlbot.begin_render_group(render_group_id());

    let (print_x, mut print_y) = PRINT_ORIGIN;
    for drawable in drawables {
        match drawable {
            Drawable::Print(text, [r, g, b]) => {
                let color = group.color_rgb(*r, *g, *b);
                group.draw_string_2d((print_x, print_y), TEXT_SCALE, text, color);
                print_y += PRINT_LINE_HEIGHT;
            }
            Drawable::Text3D(loc, text, [r, g, b]) => {
                let color = group.color_rgb(*r, *g, *b);
                group.draw_string_3d((loc.x, loc.y, loc.z), TEXT_SCALE, text, color);
            }
        }
    }

    group.render()?;
    Ok(())
}

fn render_group_id() -> i32 {
    let mut hasher = DefaultHasher::new();
    "ball chaser overlay".hash(&mut hasher);
    hasher.finish() as i32
}
