//! Size distribution along the layout axis.
//!
//! Everything here works on plain pixel vectors, one entry per declared
//! pane, hidden panes included. Hidden panes always come out as zero.
//!
//! Precedence is clamp-after-distribute: requests are honored first (an
//! over-subscribed axis is split equally), then panes under the floor are
//! raised and the last visible pane gives up the difference. When even
//! that cannot keep the last pane at the floor, the axis is split equally.

/// Requests below one pixel count as "auto".
const AUTO_THRESHOLD: f64 = 1.0;

pub(crate) fn visible_indices(hidden: &[bool], len: usize) -> Vec<usize> {
    (0..len)
        .filter(|i| !hidden.get(*i).copied().unwrap_or(false))
        .collect()
}

/// Turn per-pane requests into sizes that fill `available` exactly.
///
/// The last visible pane's request is ignored: it always takes what is
/// left. Auto panes share the leftover equally.
pub(crate) fn distribute(requests: &[f64], hidden: &[bool], available: f64, floor: f64) -> Vec<f64> {
    let mut sizes = vec![0.0; requests.len()];
    let visible = visible_indices(hidden, requests.len());
    let Some(&last) = visible.last() else {
        return sizes;
    };
    let available = available.max(0.0);

    let effective: Vec<(usize, f64)> = visible
        .iter()
        .map(|&i| {
            let request = if i == last { 0.0 } else { requests[i].max(0.0) };
            (i, if request < AUTO_THRESHOLD { 0.0 } else { request })
        })
        .collect();

    let requested_total: f64 = effective.iter().map(|(_, r)| r).sum();
    let auto_count = effective.iter().filter(|(_, r)| *r == 0.0).count();

    if requested_total > available {
        split_equally(&mut sizes, &visible, available);
    } else {
        let share = (available - requested_total) / auto_count as f64;
        for (i, request) in effective {
            sizes[i] = if request == 0.0 { share } else { request };
        }
    }

    apply_floor(&mut sizes, &visible, available, floor);
    sizes
}

/// Requests for a proportional rescale: every visible pane except the last
/// keeps its share of the axis. Zero-sized panes stay auto.
pub(crate) fn scaled_requests(pixels: &[f64], hidden: &[bool], factor: f64) -> Vec<f64> {
    let visible = visible_indices(hidden, pixels.len());
    let last = visible.last().copied();
    pixels
        .iter()
        .enumerate()
        .map(|(i, &px)| {
            let participates = !hidden.get(i).copied().unwrap_or(false) && Some(i) != last;
            if participates && px >= AUTO_THRESHOLD {
                px * factor
            } else {
                0.0
            }
        })
        .collect()
}

/// New sizes for the two panes around a dragged divider.
///
/// The leading pane asks for `leading + delta`; it is held between `min`
/// and the ceiling (`max`, or the pair's combined space, less `min` and the
/// divider) so the trailing pane keeps its floor too. The trailing pane
/// gets the rest of the pair's space. Neither result is negative.
pub(crate) fn drag_pair(
    leading: f64,
    trailing: f64,
    delta: f64,
    handle: f64,
    min: f64,
    max: Option<f64>,
) -> (f64, f64) {
    let total = leading + trailing + handle;
    let ceiling = max.map_or(total, |m| m.min(total)) - min - handle;
    let requested = leading + delta;
    let lead = requested
        .min(ceiling)
        .max(min)
        .min(total - handle)
        .max(0.0);
    let trail = (total - handle - lead).max(0.0);
    (lead, trail)
}

fn split_equally(sizes: &mut [f64], visible: &[usize], available: f64) {
    if visible.is_empty() {
        return;
    }
    let share = available / visible.len() as f64;
    for &i in visible {
        sizes[i] = share;
    }
}

fn apply_floor(sizes: &mut [f64], visible: &[usize], available: f64, floor: f64) {
    let floor = floor.max(0.0);
    let Some((&last, rest)) = visible.split_last() else {
        return;
    };
    if floor == 0.0 {
        return;
    }
    if floor * visible.len() as f64 > available {
        split_equally(sizes, visible, available);
        return;
    }

    let mut deficit = 0.0;
    for &i in rest {
        if sizes[i] < floor {
            deficit += floor - sizes[i];
            sizes[i] = floor;
        }
    }
    sizes[last] -= deficit;
    if sizes[last] < floor {
        split_equally(sizes, visible, available);
    }
}
