use std::collections::HashSet;

use tracing::debug;

use crate::coords::Point;
use crate::creature::Motion;
use crate::drones::{BATTERY_MAX, RadarDirection, Side};
use crate::observation::{DroneReport, InitialObservation, TurnObservation};
use crate::policy::SaveCommit;
use crate::species::{CreatureColor, CreatureType};
use crate::world::World;

pub fn reconcile_initial(world: &mut World, init: &InitialObservation) {
    for info in &init.creatures {
        world
            .creature_mut(info.id)
            .classify(CreatureColor::from_code(info.color), CreatureType::from_code(info.kind));
    }
    debug!(creatures = world.creature_count(), "roster loaded");
}

/// Applies one turn's batch. The order of the steps matters: drones must
/// exist before scans name them, and positions are cleared only once every
/// visibility report has been read.
pub fn reconcile_turn(world: &mut World, turn: &TurnObservation) {
    world.score.mine = turn.my_score;
    world.score.foe = turn.foe_score;

    for &id in &turn.my_saved {
        world.creature_mut(id).saved = true;
    }
    for &id in &turn.foe_saved {
        world.creature_mut(id).saved_by_foe = true;
    }

    apply_drones(world, Side::Mine, &turn.my_drones);
    apply_drones(world, Side::Foe, &turn.foe_drones);

    for scan in &turn.scans {
        world.creature_mut(scan.creature_id).scanned = true;
        // unknown ids are taken to be ours
        let side = if world.drone(Side::Foe, scan.drone_id).is_some() {
            Side::Foe
        } else {
            Side::Mine
        };
        world
            .drone_mut(side, scan.drone_id)
            .memory
            .insert(scan.creature_id);
    }

    let mut visible = HashSet::with_capacity(turn.visible.len());
    for v in &turn.visible {
        world.creature_mut(v.id).motion = Some(Motion {
            pos: Point::new(v.x, v.y),
            vel: Point::new(v.vx, v.vy),
        });
        visible.insert(v.id);
    }
    for creature in world.creatures_mut() {
        if !visible.contains(&creature.id) {
            creature.clear_motion();
        }
    }

    for blip in &turn.blips {
        let direction = RadarDirection::from_code(&blip.direction);
        world
            .drone_mut(Side::Mine, blip.drone_id)
            .radar
            .insert(blip.creature_id, direction);
    }

    world.count_down_turn();
    debug!(
        visible = visible.len(),
        scans = turn.scans.len(),
        blips = turn.blips.len(),
        turns_left = world.turns_left(),
        "turn reconciled"
    );
}

/// Banks a drone's memorized creatures and empties its memory.
pub fn commit_save(world: &mut World, commit: &SaveCommit) {
    for &id in &commit.creatures {
        world.creature_mut(id).saved = true;
    }
    world.drone_mut(Side::Mine, commit.drone_id).memory.clear();
    debug!(drone = commit.drone_id, saved = commit.creatures.len(), "scans saved");
}

fn apply_drones(world: &mut World, side: Side, reports: &[DroneReport]) {
    for report in reports {
        let drone = world.drone_mut(side, report.id);
        drone.pos = report.pos();
        drone.emergency = report.emergency;
        drone.battery = report.battery.clamp(0, BATTERY_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{CreatureInfo, RadarBlip, ScanReport, VisibleCreature};

    fn drone(id: u32, x: i32, y: i32, battery: i32) -> DroneReport {
        DroneReport { id, x, y, emergency: false, battery }
    }

    fn seen(id: u32, x: i32, y: i32) -> VisibleCreature {
        VisibleCreature { id, x, y, vx: 10, vy: -10 }
    }

    #[test]
    fn initial_roster_classifies_creatures() {
        let mut w = World::new(200, 42);
        reconcile_initial(
            &mut w,
            &InitialObservation {
                creatures: vec![
                    CreatureInfo { id: 4, color: 0, kind: 2 },
                    CreatureInfo { id: 5, color: 3, kind: 0 },
                ],
            },
        );
        let c = w.creature(4).unwrap();
        assert_eq!(c.color, CreatureColor::Pink);
        assert_eq!(c.kind, CreatureType::Crab);
        assert!(c.motion.is_none());
        assert_eq!(w.creature_count(), 2);
    }

    #[test]
    fn scores_are_overwritten() {
        let mut w = World::new(200, 42);
        reconcile_turn(&mut w, &TurnObservation { my_score: 10, foe_score: 3, ..Default::default() });
        reconcile_turn(&mut w, &TurnObservation { my_score: 4, foe_score: 9, ..Default::default() });
        assert_eq!((w.score.mine, w.score.foe), (4, 9));
        assert_eq!(w.turns_left(), 198);
    }

    #[test]
    fn saves_are_recorded_per_side_and_create_unknown_creatures() {
        let mut w = World::new(200, 42);
        reconcile_turn(
            &mut w,
            &TurnObservation { my_saved: vec![1], foe_saved: vec![2], ..Default::default() },
        );
        assert!(w.creature(1).unwrap().saved);
        assert!(!w.creature(1).unwrap().saved_by_foe);
        assert!(w.creature(2).unwrap().saved_by_foe);
        assert!(!w.creature(2).unwrap().saved);
    }

    #[test]
    fn drone_reports_overwrite_and_clamp_battery() {
        let mut w = World::new(200, 42);
        let turn = TurnObservation {
            my_drones: vec![DroneReport { id: 0, x: 10, y: 20, emergency: true, battery: 99 }],
            foe_drones: vec![drone(1, 30, 40, -2)],
            ..Default::default()
        };
        reconcile_turn(&mut w, &turn);
        let mine = w.drone(Side::Mine, 0).unwrap();
        assert_eq!(mine.pos, Point::new(10, 20));
        assert!(mine.emergency);
        assert_eq!(mine.battery, BATTERY_MAX);
        assert_eq!(w.drone(Side::Foe, 1).unwrap().battery, 0);
        assert!(w.drone(Side::Mine, 1).is_none());
    }

    #[test]
    fn scans_mark_creature_and_fill_memory() {
        let mut w = World::new(200, 42);
        let turn = TurnObservation {
            my_drones: vec![drone(0, 0, 0, 30)],
            scans: vec![
                ScanReport { drone_id: 0, creature_id: 4 },
                ScanReport { drone_id: 0, creature_id: 4 },
                ScanReport { drone_id: 0, creature_id: 6 },
            ],
            ..Default::default()
        };
        reconcile_turn(&mut w, &turn);
        assert!(w.creature(4).unwrap().scanned);
        let memory: Vec<u32> = w.drone(Side::Mine, 0).unwrap().memory.iter().copied().collect();
        assert_eq!(memory, vec![4, 6]);
    }

    #[test]
    fn foe_scans_stay_with_foe_drones() {
        let mut w = World::new(200, 42);
        let turn = TurnObservation {
            my_drones: vec![drone(0, 0, 0, 30), drone(2, 0, 0, 30)],
            foe_drones: vec![drone(1, 0, 0, 30), drone(3, 0, 0, 30)],
            scans: vec![
                ScanReport { drone_id: 1, creature_id: 7 },
                ScanReport { drone_id: 0, creature_id: 8 },
            ],
            ..Default::default()
        };
        reconcile_turn(&mut w, &turn);
        assert_eq!(w.my_drone_ids(), vec![0, 2]);
        assert!(w.drone(Side::Mine, 1).is_none());
        assert!(w.drone(Side::Foe, 1).unwrap().memory.contains(&7));
        assert!(w.drone(Side::Mine, 0).unwrap().memory.contains(&8));
        assert!(w.creature(7).unwrap().scanned);
    }

    #[test]
    fn scan_from_unseen_drone_registers_as_mine() {
        let mut w = World::new(200, 42);
        reconcile_turn(
            &mut w,
            &TurnObservation { scans: vec![ScanReport { drone_id: 5, creature_id: 9 }], ..Default::default() },
        );
        assert!(w.drone(Side::Mine, 5).unwrap().memory.contains(&9));
        assert!(w.drone(Side::Foe, 5).is_none());
    }

    #[test]
    fn creatures_out_of_sight_lose_motion() {
        let mut w = World::new(200, 42);
        reconcile_turn(
            &mut w,
            &TurnObservation { visible: vec![seen(1, 100, 200), seen(2, 300, 400)], ..Default::default() },
        );
        assert!(w.creature(1).unwrap().is_visible());
        assert!(w.creature(2).unwrap().is_visible());

        reconcile_turn(&mut w, &TurnObservation { visible: vec![seen(2, 310, 390)], ..Default::default() });
        assert!(w.creature(1).unwrap().motion.is_none());
        let m = w.creature(2).unwrap().motion.unwrap();
        assert_eq!(m.pos, Point::new(310, 390));
        assert_eq!(m.vel, Point::new(10, -10));
    }

    #[test]
    fn flags_stay_set_across_turns() {
        let mut w = World::new(200, 42);
        reconcile_turn(
            &mut w,
            &TurnObservation {
                my_saved: vec![1],
                scans: vec![ScanReport { drone_id: 0, creature_id: 2 }],
                ..Default::default()
            },
        );
        reconcile_turn(&mut w, &TurnObservation::default());
        assert!(w.creature(1).unwrap().saved);
        assert!(w.creature(2).unwrap().scanned);
    }

    #[test]
    fn radar_hints_overwrite_per_creature() {
        let mut w = World::new(200, 42);
        let blip = |dir: &str| RadarBlip { drone_id: 0, creature_id: 9, direction: dir.to_string() };
        reconcile_turn(&mut w, &TurnObservation { blips: vec![blip("TL")], ..Default::default() });
        assert_eq!(w.drone(Side::Mine, 0).unwrap().radar_hint(9), Some(RadarDirection::TopLeft));
        reconcile_turn(&mut w, &TurnObservation { blips: vec![blip("BR")], ..Default::default() });
        assert_eq!(w.drone(Side::Mine, 0).unwrap().radar_hint(9), Some(RadarDirection::BottomRight));
        reconcile_turn(&mut w, &TurnObservation { blips: vec![blip("up")], ..Default::default() });
        assert_eq!(w.drone(Side::Mine, 0).unwrap().radar_hint(9), Some(RadarDirection::Unknown));
    }

    #[test]
    fn commit_save_banks_memory() {
        let mut w = World::new(200, 42);
        reconcile_turn(
            &mut w,
            &TurnObservation {
                my_drones: vec![drone(0, 0, 100, 30)],
                scans: vec![ScanReport { drone_id: 0, creature_id: 3 }],
                ..Default::default()
            },
        );
        commit_save(&mut w, &SaveCommit { drone_id: 0, creatures: vec![3] });
        assert!(w.creature(3).unwrap().saved);
        assert!(w.drone(Side::Mine, 0).unwrap().memory.is_empty());
    }
}
