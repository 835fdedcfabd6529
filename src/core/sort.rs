/// Sorts `values` ascending in place with bubble sort and returns it.
///
/// Only adjacent elements are swapped, and only when the left one is strictly
/// greater, so equal elements keep their relative order. Stops as soon as a
/// pass makes no swaps.
pub fn bubble_sort<T: PartialOrd>(values: &mut [T]) -> &mut [T] {
    let len = values.len();
    if len < 2 {
        return values;
    }

    for i in 0..len - 1 {
        let mut swapped = false;
        // 每輪結束後，最後 i + 1 個元素已就位
        for j in 0..len - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            tracing::debug!("Sorted {} values after {} passes", len, i + 1);
            break;
        }
    }

    values
}
